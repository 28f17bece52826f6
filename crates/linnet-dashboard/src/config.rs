use crate::error::DashboardError;

pub const API_URL_ENV: &str = "LINNET_API_URL";

/// Value of `LINNET_API_URL` when the dashboard was compiled, if any.
const BUILD_API_URL: Option<&str> = option_env!("LINNET_API_URL");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
}

impl DashboardConfig {
    /// Reads the API base URL from the environment, falling back to the value
    /// baked in at build time.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_env_with(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| BUILD_API_URL.map(str::to_string))
        })
    }

    /// Same as [`DashboardConfig::from_env`] but reads values through `get`,
    /// so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, DashboardError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_url = get(API_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(DashboardError::MissingApiUrl)?;

        Ok(Self { api_url })
    }
}

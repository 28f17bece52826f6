use linnet_api_client::ReqwestApiClient;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::view::{HealthState, HealthView};

pub const TITLE: &str = "Linnet Dashboard";

/// The dashboard shell: a title, a rule, and the mounted health view.
#[derive(Debug)]
pub struct Dashboard {
    health: HealthView,
}

impl Dashboard {
    /// Builds the API client from `config` and mounts the health view.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let client = ReqwestApiClient::new(&config.api_url)?;
        Ok(Self {
            health: HealthView::mount(client),
        })
    }

    pub async fn settled(&mut self) -> HealthState {
        self.health.settled().await
    }

    pub fn render(&self) -> String {
        render_shell(&self.health.render())
    }
}

pub fn render_shell(content: &str) -> String {
    let rule = "-".repeat(TITLE.len());
    format!("{TITLE}\n{rule}\n{content}\n")
}

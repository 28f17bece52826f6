//! reqwest-backed implementation of [`HealthApi`].

use async_trait::async_trait;
use linnet_core::{ApiErrorBody, HEALTH_PATH};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::response::{error_detail, ApiResponse, HealthPayload};

/// Calls exposed by the Linnet API.
#[async_trait]
pub trait HealthApi: Send + Sync {
    /// `GET /health`.
    async fn health(&self) -> Result<ApiResponse<HealthPayload>, ClientError>;
}

#[derive(Clone, Debug)]
pub struct ReqwestApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:3500`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "sending api request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            // an explicit error object is the error branch whatever the status
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                debug!(
                    %url,
                    %status,
                    error_message = body.message(),
                    "api returned error payload"
                );
                return Ok(ApiResponse::error(status, body.into()));
            }

            let data =
                serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))?;
            Ok(ApiResponse::data(status, data))
        } else {
            debug!(%url, %status, "api returned error branch");
            Ok(ApiResponse::error(status, error_detail(status, &text)))
        }
    }
}

#[async_trait]
impl HealthApi for ReqwestApiClient {
    async fn health(&self) -> Result<ApiResponse<HealthPayload>, ClientError> {
        self.get(HEALTH_PATH).await
    }
}

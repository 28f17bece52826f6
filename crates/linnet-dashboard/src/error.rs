use linnet_api_client::ClientError;
use thiserror::Error;

/// Startup failures. Any of these stops the dashboard before it renders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("LINNET_API_URL is not defined")]
    MissingApiUrl,
    #[error("api client setup failed: {0}")]
    Client(
        #[from]
        #[source]
        ClientError,
    ),
}

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linnet_core::ApiErrorBody;
use thiserror::Error;

/// Errors surfaced to HTTP callers as `{"error":{"message":"..."}}`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("route not found: {path}")]
    NotFound { path: String },
    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: Method, path: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ApiErrorBody::new(self.to_string()))).into_response()
    }
}

/// Fatal errors of the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server I/O failed: {0}")]
    Io(
        #[from]
        #[source]
        std::io::Error,
    ),
}

use axum::http::{Method, Uri};
use axum::routing::get;
use axum::Router;
use linnet_core::HEALTH_PATH;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::handlers::health_handler;

pub struct App {}

impl App {
    pub fn router() -> Router {
        Router::new()
            .route(HEALTH_PATH, get(health_handler))
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .layer(TraceLayer::new_for_http())
    }
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

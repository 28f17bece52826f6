//! HTTP service answering the Linnet liveness probe.
//!
//! [`App::router`] builds the route table; [`server::serve`] binds it to the
//! configured address and runs until Ctrl-C.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use app::App;
pub use config::ServerConfig;
pub use error::{AppError, ServerError};

//! Terminal dashboard for the Linnet API.
//!
//! On start the dashboard mounts a [`HealthView`], which fetches `GET /health`
//! once and moves from `Loading...` to either the reported status or an error.

pub mod config;
pub mod error;
pub mod shell;
pub mod view;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use shell::Dashboard;
pub use view::{fetch_health, HealthState, HealthView};

//! Typed HTTP client for the Linnet API.
//!
//! A non-2xx answer is not an `Err`: it comes back as the error branch of an
//! [`ApiResponse`]. Only transport and decoding failures are [`ClientError`]s.

pub mod client;
pub mod error;
pub mod response;

pub use client::{HealthApi, ReqwestApiClient};
pub use error::ClientError;
pub use response::{ApiBody, ApiResponse, HealthPayload};

pub use linnet_core::ErrorDetail;
pub use reqwest::StatusCode;

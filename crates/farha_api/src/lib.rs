//! HTTP transport for the F.A.R.H.A assistant backend.
//!
//! This crate owns request building, response decoding, and error-envelope
//! parsing for the backend's REST operations only. It contains no persistence
//! and no client policy; the state machines in `assistant_client` consume it
//! through the `assistant_provider` contract.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod payload;
pub mod url;

pub use client::FarhaApiClient;
pub use config::FarhaApiConfig;
pub use error::FarhaApiError;
pub use url::{normalize_api_url, operation_url, DEFAULT_API_BASE_URL};

//! HTTP Client Module
//!
//! A caching JSON HTTP client with centralized error translation and
//! explicit cancellation for in-flight fetches.

mod api;
mod cancel;

pub use api::ApiClient;
pub use cancel::CancelToken;

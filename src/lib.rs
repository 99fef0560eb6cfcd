//! webstate - Client-side state utilities
//!
//! Four independent building blocks for interactive clients:
//!
//! - [`Debounced`](debounce::Debounced): a value that settles only after a
//!   quiet period, for search boxes and similar rapid inputs.
//! - [`PersistentState`](store::PersistentState): typed state mirrored into
//!   a durable key-value store, with best-effort cross-context sync.
//! - [`ApiClient`](client::ApiClient): a JSON HTTP client with an
//!   instance-owned TTL + LRU response cache and fixed, user-facing error
//!   messages.
//! - [`FormController`](form::FormController): field values, touched state,
//!   validation errors, and the submission lifecycle for a form.
//!
//! None of the utilities depends on another; each is consumed directly by
//! application views.

pub mod cache;
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod store;

pub use cache::ResponseCache;
pub use client::{ApiClient, CancelToken};
pub use config::Config;
pub use debounce::Debounced;
pub use error::{ApiError, ApiResult, StoreError};
pub use form::FormController;
pub use store::PersistentState;

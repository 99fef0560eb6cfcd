//! API Client
//!
//! JSON HTTP client wrapping reqwest with an instance-owned response cache
//! and centralized error translation. GET responses are cached under a
//! `method:endpoint` signature; mutating verbs always go to the network.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, ResponseCache};
use crate::client::CancelToken;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

// == Api Client ==
/// HTTP client with response caching for a single base address.
///
/// The cache belongs to the instance: two clients never share entries, and
/// dropping the client drops its cache.
#[derive(Debug)]
pub struct ApiClient {
    /// Underlying HTTP transport
    http: reqwest::Client,
    /// Base address prefixed to every endpoint
    base_url: String,
    /// Cached GET payloads, keyed by request signature
    cache: RwLock<ResponseCache>,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a client for `base_url` with default configuration
    /// (5 minute cache TTL, 1000 entries, 10 second request timeout).
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(base_url, &Config::default())
    }

    /// Creates a client for `base_url` with explicit configuration.
    pub fn with_config(base_url: impl Into<String>, config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: RwLock::new(ResponseCache::new(
                config.cache_capacity,
                Duration::from_millis(config.cache_ttl_ms),
            )),
        })
    }

    // == GET ==
    /// GET request with caching enabled.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.get_with_cache(endpoint, true).await
    }

    /// GET request with optional caching.
    ///
    /// With caching enabled, a fresh cached payload is returned without a
    /// network call; otherwise the call is issued and the raw payload stored
    /// on success.
    pub async fn get_with_cache<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        use_cache: bool,
    ) -> ApiResult<T> {
        let key = cache_key(endpoint);

        if use_cache {
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.lookup(&key) {
                debug!(endpoint, "serving GET from cache");
                return decode(value);
            }
        }

        debug!(endpoint, "issuing GET");
        let value = self.request_json(Method::GET, endpoint, None).await?;

        if use_cache {
            self.cache.write().await.insert(key, value.clone());
        }
        decode(value)
    }

    /// GET request guarded by an explicit cancellation token.
    ///
    /// The token is checked before the call is issued and again before the
    /// result is cached or returned, so a response that arrives after
    /// cancellation is discarded without touching the cache.
    pub async fn get_cancellable<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        cancel: &CancelToken,
    ) -> ApiResult<T> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let key = cache_key(endpoint);
        {
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.lookup(&key) {
                debug!(endpoint, "serving GET from cache");
                return decode(value);
            }
        }

        let value = self.request_json(Method::GET, endpoint, None).await?;

        if cancel.is_cancelled() {
            debug!(endpoint, "discarding response for cancelled GET");
            return Err(ApiError::Cancelled);
        }

        self.cache.write().await.insert(key, value.clone());
        decode(value)
    }

    // == Mutating Verbs ==
    /// POST request. Never consults or populates the cache.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(Method::POST, endpoint, body).await
    }

    /// PUT request. Never consults or populates the cache.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(Method::PUT, endpoint, body).await
    }

    /// PATCH request. Never consults or populates the cache.
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(Method::PATCH, endpoint, body).await
    }

    /// DELETE request. Never consults or populates the cache.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let value = self.request_json(Method::DELETE, endpoint, None).await?;
        decode(value)
    }

    // == Cache Management ==
    /// Removes all cached responses.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    /// Removes the cached response for one endpoint.
    pub async fn clear_cache_entry(&self, endpoint: &str) {
        self.cache.write().await.remove(&cache_key(endpoint));
    }

    /// Returns a snapshot of the cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // == Internals ==
    async fn send_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_value(body).map_err(|_| ApiError::Request)?;
        debug!(endpoint, %method, "issuing request");
        let value = self.request_json(method, endpoint, Some(body)).await?;
        decode(value)
    }

    /// Issues one request and returns the raw JSON payload.
    ///
    /// Non-success statuses and transport failures are translated into the
    /// fixed `ApiError` message set.
    async fn request_json(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Deterministic cache key derived from request method and endpoint.
fn cache_key(endpoint: &str) -> String {
    format!("GET:{endpoint}")
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|_| ApiError::Request)
}

//! Persistent State Module
//!
//! Mirrors a typed value in memory and keeps it synchronized with a durable
//! string-keyed store. Persistence failures never reach the caller: they are
//! logged and the in-memory value wins, which means the memory and durable
//! copies can diverge silently until the next successful write.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::store::StorageBackend;

// == Persistent State ==
/// A typed value synchronized with one key of a [`StorageBackend`].
///
/// Multiple instances bound to the same backend and key stay eventually
/// consistent through the backend's change notifications: the last write
/// wins, with no conflict detection.
#[derive(Debug)]
pub struct PersistentState<T> {
    /// Key under which the value is stored
    key: String,
    /// The durable medium
    backend: Arc<dyn StorageBackend>,
    /// In-memory mirror of the stored value
    mirror: Arc<RwLock<T>>,
    /// Listener applying cross-context change notifications
    listener: JoinHandle<()>,
}

impl<T> PersistentState<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Binds to `key`, reading the stored value or falling back to `default`.
    ///
    /// A missing key or undeserializable stored text falls back to the
    /// default; the failure is logged, never surfaced.
    ///
    /// Must be called within a tokio runtime: the change listener is
    /// spawned here.
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();

        let initial = match backend.get_item(&key) {
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(parse_error) => {
                    warn!(key = %key, %parse_error, "stored value unreadable, using default");
                    default
                }
            },
            None => default,
        };

        let mirror = Arc::new(RwLock::new(initial));
        let listener = spawn_listener(backend.subscribe(), key.clone(), Arc::clone(&mirror));

        Self {
            key,
            backend,
            mirror,
            listener,
        }
    }

    // == Get ==
    /// Returns a clone of the current in-memory value.
    pub async fn get(&self) -> T {
        self.mirror.read().await.clone()
    }

    // == Set ==
    /// Replaces the value, updating memory first and then persisting.
    pub async fn set(&self, value: T) {
        *self.mirror.write().await = value.clone();
        self.persist(&value);
    }

    // == Update ==
    /// Computes the new value from the previous one, then persists it.
    pub async fn update<F>(&self, apply: F)
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.mirror.write().await;
        let next = apply(&guard);
        *guard = next.clone();
        drop(guard);
        self.persist(&next);
    }

    // == Key ==
    /// Returns the key this state is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serializes and writes the value to the backend.
    ///
    /// Failures are logged only; the in-memory value is not rolled back.
    fn persist(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => {
                if let Err(store_error) = self.backend.set_item(&self.key, &text) {
                    error!(key = %self.key, %store_error, "failed to persist value");
                }
            }
            Err(serialize_error) => {
                error!(key = %self.key, %serialize_error, "failed to serialize value");
            }
        }
    }
}

impl<T> Drop for PersistentState<T> {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

/// Applies change notifications for `key` to the mirror.
///
/// Parseable new values overwrite the mirror (last-writer-wins); anything
/// else is logged and skipped. Lagged receivers just pick up from the next
/// event, which is acceptable for best-effort synchronization.
fn spawn_listener<T>(
    mut events: tokio::sync::broadcast::Receiver<crate::store::StorageEvent>,
    key: String,
    mirror: Arc<RwLock<T>>,
) -> JoinHandle<()>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if event.key != key {
                        continue;
                    }
                    match serde_json::from_str(&event.new_value) {
                        Ok(value) => *mirror.write().await = value,
                        Err(parse_error) => {
                            warn!(key = %key, %parse_error, "ignoring unreadable change notification");
                        }
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(key = %key, skipped, "change notifications lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

//! Storage Backend Module
//!
//! The durable medium behind persistent state: string keys mapped to
//! JSON-serialized text, plus change notifications so other consumers of the
//! same store can follow along.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tokio::sync::broadcast;
use tracing::warn;

use crate::error::StoreError;

/// Broadcast channel capacity for change notifications.
const EVENT_CAPACITY: usize = 64;

// == Storage Event ==
/// Notification that a key was written somewhere in the store.
#[derive(Debug, Clone)]
pub struct StorageEvent {
    /// The key that changed
    pub key: String,
    /// The serialized text now stored under the key
    pub new_value: String,
}

// == Storage Backend Trait ==
/// A durable string key-value store with change notifications.
///
/// Reads and writes are whole-value; there is no partial update. A write
/// that succeeds emits a [`StorageEvent`] to every subscriber.
pub trait StorageBackend: std::fmt::Debug + Send + Sync {
    /// Returns the stored text for `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, notifying subscribers on success.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Subscribes to change notifications for the whole store.
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

// == Memory Storage ==
/// In-process backend. Durable only for the lifetime of the process; used
/// for ephemeral state and as the test double for the file backend.
#[derive(Debug)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            items: Mutex::new(HashMap::new()),
            events,
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().map_err(|_| StoreError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        drop(items);

        // No subscribers is fine; the event is best-effort
        let _ = self.events.send(StorageEvent {
            key: key.to_string(),
            new_value: value.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}

// == File Storage ==
/// File-backed store holding all keys in one JSON object.
///
/// The full map is rewritten on every set. Suitable for the small
/// per-application state this crate targets, not for bulk data.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl FileStorage {
    /// Opens (or creates) a file-backed store at `path`.
    ///
    /// A missing file starts empty. An unreadable map in an existing file is
    /// logged and discarded rather than surfaced, matching the store's
    /// fall-back-to-default contract.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let text = fs::read_to_string(&path)?;
            match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(error) => {
                    warn!(path = %path.display(), %error, "discarding unreadable store file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Ok(Self {
            path,
            items: Mutex::new(items),
            events,
        })
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().map_err(|_| StoreError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        let serialized = serde_json::to_string_pretty(&*items)?;

        // The file write stays under the lock so concurrent writers cannot
        // persist snapshots out of order
        fs::write(&self.path, serialized)?;
        drop(items);

        let _ = self.events.send(StorageEvent {
            key: key.to_string(),
            new_value: value.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}

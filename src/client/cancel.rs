//! Cancellation Token Module
//!
//! Explicit cancellation for in-flight fetches. A caller that tears down
//! (e.g. a view being discarded) cancels its token; the client checks the
//! token before applying or caching results, so late responses are dropped
//! instead of mutating discarded state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// == Cancel Token ==
/// Shared cancellation flag for asynchronous operations.
///
/// Cloning is cheap; all clones observe the same flag. Cancellation is
/// one-way and permanent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    // == Constructor ==
    /// Creates a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cancel ==
    /// Marks the token as cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    // == Is Cancelled ==
    /// Returns whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

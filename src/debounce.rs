//! Debounced Value Module
//!
//! Holds a rapidly-changing input value and propagates it downstream only
//! after the input has stayed unchanged for a full quiet period. Useful for
//! search boxes and anything else that should not react to every keystroke.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

// == Debounced ==
/// A value holder that settles after a quiet period.
///
/// Every `set` restarts the delay timer and cancels the pending update from
/// the prior value, so at most one timer is pending at a time. The settled
/// value is observable through [`get`](Self::get) or a watch subscription.
/// Dropping the holder cancels any pending timer, so no update is applied
/// after teardown.
#[derive(Debug)]
pub struct Debounced<T> {
    /// Carries the settled value to subscribers
    output: watch::Sender<T>,
    /// Quiet period an input must survive before settling
    delay: Duration,
    /// The single pending timer, if any
    pending: Option<JoinHandle<()>>,
}

impl<T> Debounced<T>
where
    T: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a holder whose settled value starts at `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (output, _) = watch::channel(initial);
        Self {
            output,
            delay,
            pending: None,
        }
    }

    // == Set ==
    /// Feeds a new input value, restarting the quiet-period timer.
    ///
    /// The pending update from any prior value is cancelled; `value` becomes
    /// the settled value only if no further `set` arrives within the delay.
    /// Must be called within a tokio runtime: the timer is spawned here.
    pub fn set(&mut self, value: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let output = self.output.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            output.send_replace(value);
        }));
    }

    // == Get ==
    /// Returns the current settled value.
    pub fn get(&self) -> T {
        self.output.borrow().clone()
    }

    // == Subscribe ==
    /// Returns a receiver that observes every settled value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.subscribe()
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Cancelable delayed callback. Each `schedule` aborts whatever is pending
/// and starts a fresh timer, so rapid edits coalesce into a single firing
/// carrying the last value. Superseded callbacks are dropped, never queued.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Runs `callback` after the quiet period, unless superseded first.
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            callback();
        }));
    }

    /// Discards the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

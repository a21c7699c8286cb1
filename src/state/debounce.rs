//! Search input debouncing
//!
//! Keystrokes are pushed as they arrive; only the text that survives a
//! quiet period is committed on the output channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer and the receiver of committed search text.
    ///
    /// Must be used from within a tokio runtime.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Record new input, restarting the quiet period
    pub fn push(&mut self, text: impl Into<String>) {
        self.cancel();

        let text = text.into();
        let tx = self.tx.clone();
        let delay = self.delay;
        trace!(text = %text, "Search input debounced");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means the page was torn down
            let _ = tx.send(text);
        }));
    }

    /// Drop any input that has not been committed yet
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_commits_last_value_after_delay() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(Duration::from_millis(500));
        let started = Instant::now();

        debouncer.push("m");
        debouncer.push("mu");
        debouncer.push("music");
        assert!(debouncer.is_pending());

        assert_eq!(rx.recv().await.as_deref(), Some("music"));
        assert!(started.elapsed() >= Duration::from_millis(500));

        // nothing else was committed
        let next = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(next.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_push_restarts_window() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(Duration::from_millis(500));

        debouncer.push("car");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(rx.try_recv().is_err());

        debouncer.push("career");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await.as_deref(), Some("career"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_commit() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(Duration::from_millis(500));
        debouncer.push("stale");
        drop(debouncer);

        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(Duration::from_millis(100));
        debouncer.push("x");
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        let next = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(next.is_err());
    }
}

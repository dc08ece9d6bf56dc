//! One-shot timers with cancellation.
//!
//! A timer runs its callback once after a delay on the tokio runtime. The
//! returned [`TimerHandle`] cancels the timer if it has not fired yet, either
//! explicitly or when dropped.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a pending one-shot timer
#[derive(Debug)]
pub struct TimerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancel the timer. No-op once the callback has started.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the callback ran or the timer was cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Run `callback` once after `delay`.
///
/// The timer is also cancelled when `parent` is, which lets an owner cancel
/// a chain of timers through a single token. Must be called from within a
/// tokio runtime.
pub fn schedule_once<F>(parent: &CancellationToken, delay: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let token = parent.child_token();
    let cancelled = token.clone();

    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = cancelled.cancelled() => {
                tracing::trace!(?delay, "Timer cancelled before firing");
            }
            _ = tokio::time::sleep(delay) => callback(),
        }
    });

    TimerHandle { token, task }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use tokio::sync::oneshot;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let start = Instant::now();
        let (tx, rx) = oneshot::channel();

        let _handle = schedule_once(&CancellationToken::new(), Duration::from_millis(100), move || {
            let _ = tx.send(Instant::now());
        });

        let fired_at = rx.await.unwrap();
        assert!(fired_at - start >= Duration::from_millis(100));
        assert!(fired_at - start < Duration::from_millis(110));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = schedule_once(&CancellationToken::new(), Duration::from_millis(100), move || {
            flag.store(true, Ordering::SeqCst);
        });
        handle.cancel();
        assert!(handle.is_cancelled());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = schedule_once(&CancellationToken::new(), Duration::from_millis(50), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(handle);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_cancel_propagates() {
        let parent = CancellationToken::new();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        let handle = schedule_once(&parent, Duration::from_millis(50), move || {
            flag.store(true, Ordering::SeqCst);
        });
        parent.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(handle.is_cancelled());
        assert!(!fired.load(Ordering::SeqCst));
    }
}

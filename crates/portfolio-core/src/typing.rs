//! Typewriter reveal of a fixed string.
//!
//! [`TypingAnimator`] is the pure cursor state. [`TypingSession`] drives it on
//! the tokio runtime, one character per delay, and publishes every step on a
//! watch channel. The channel closes once the full string is shown or the
//! session is cancelled.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::timer::{schedule_once, TimerHandle};

/// Delay between characters when none is configured
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(100);

/// Cursor into a target string; everything before the cursor is displayed.
///
/// The cursor counts characters, not bytes, and stays within
/// `0..=self.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingAnimator {
    target: String,
    delay: Duration,
    cursor: usize,
}

impl TypingAnimator {
    pub fn new(target: impl Into<String>, delay: Duration) -> Self {
        Self {
            target: target.into(),
            delay,
            cursor: 0,
        }
    }

    pub fn with_delay_ms(target: impl Into<String>, delay_ms: u64) -> Self {
        Self::new(target, Duration::from_millis(delay_ms))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the target
    pub fn len(&self) -> usize {
        self.target.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.len()
    }

    /// The revealed prefix
    pub fn displayed(&self) -> &str {
        match self.target.char_indices().nth(self.cursor) {
            Some((byte_idx, _)) => &self.target[..byte_idx],
            None => &self.target,
        }
    }

    /// Delay before the next character, or `None` when nothing is left to reveal
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_complete() {
            None
        } else {
            Some(self.delay)
        }
    }

    /// Reveal the character under the cursor
    pub fn advance(&mut self) -> Option<char> {
        let next = self.target.chars().nth(self.cursor)?;
        self.cursor += 1;
        Some(next)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// A running typewriter animation.
///
/// Each step schedules exactly one timer, and the next timer is only
/// scheduled after the previous one fired, so steps never overlap.
#[derive(Debug)]
pub struct TypingSession {
    token: CancellationToken,
    frames: watch::Receiver<TypingAnimator>,
    pending: Arc<Mutex<Option<TimerHandle>>>,
}

impl TypingSession {
    /// Start revealing from the animator's current cursor.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(animator: TypingAnimator) -> Self {
        let (tx, frames) = watch::channel(animator.clone());
        let token = CancellationToken::new();
        let pending = Arc::new(Mutex::new(None));

        tracing::debug!(
            target_len = animator.len(),
            delay_ms = animator.delay().as_millis() as u64,
            "Starting typing session"
        );
        schedule_step(animator, tx, token.clone(), pending.clone());

        Self {
            token,
            frames,
            pending,
        }
    }

    /// Receiver of animator snapshots, one per revealed character
    pub fn subscribe(&self) -> watch::Receiver<TypingAnimator> {
        self.frames.clone()
    }

    /// Latest published snapshot
    pub fn current(&self) -> TypingAnimator {
        self.frames.borrow().clone()
    }

    /// Cancel the pending step. The channel closes and no further frames
    /// are published.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Cancelling typing session");
        }
        self.token.cancel();
        self.pending.lock().take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for TypingSession {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

fn schedule_step(
    mut animator: TypingAnimator,
    tx: watch::Sender<TypingAnimator>,
    token: CancellationToken,
    pending: Arc<Mutex<Option<TimerHandle>>>,
) {
    let Some(delay) = animator.next_delay() else {
        tracing::debug!("Typing session complete");
        pending.lock().take();
        return;
    };

    // Held across scheduling so a zero-delay step cannot store its successor
    // before this handle lands in the slot.
    let mut slot = pending.lock();
    let next_pending = pending.clone();
    let next_token = token.clone();
    let handle = schedule_once(&token, delay, move || {
        animator.advance();
        tx.send_replace(animator.clone());
        schedule_step(animator, tx, next_token, next_pending);
    });
    *slot = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_animator_shows_nothing() {
        let animator = TypingAnimator::with_delay_ms("Hi", 100);
        assert_eq!(animator.displayed(), "");
        assert_eq!(animator.cursor(), 0);
        assert_eq!(animator.next_delay(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_advance_reveals_prefixes() {
        let mut animator = TypingAnimator::with_delay_ms("Hi", 100);
        assert_eq!(animator.advance(), Some('H'));
        assert_eq!(animator.displayed(), "H");
        assert_eq!(animator.advance(), Some('i'));
        assert_eq!(animator.displayed(), "Hi");
        assert!(animator.is_complete());
    }

    #[test]
    fn test_complete_stops() {
        let mut animator = TypingAnimator::with_delay_ms("Hi", 100);
        animator.advance();
        animator.advance();

        assert_eq!(animator.next_delay(), None);
        assert_eq!(animator.advance(), None);
        assert_eq!(animator.cursor(), 2);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut animator = TypingAnimator::with_delay_ms("héllo", 10);
        assert_eq!(animator.len(), 5);
        animator.advance();
        animator.advance();
        assert_eq!(animator.displayed(), "hé");
    }

    #[test]
    fn test_reset() {
        let mut animator = TypingAnimator::with_delay_ms("abc", 10);
        animator.advance();
        animator.reset();
        assert_eq!(animator.displayed(), "");
        assert!(!animator.is_complete());
    }

    #[test]
    fn test_empty_target_is_complete() {
        let animator = TypingAnimator::new("", DEFAULT_TYPING_DELAY);
        assert!(animator.is_empty());
        assert!(animator.is_complete());
        assert_eq!(animator.next_delay(), None);
    }
}

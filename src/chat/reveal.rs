//! Typewriter Reveal
//!
//! Assistant replies arrive whole and are revealed character by
//! character purely for presentation. The reveal is a cancellable
//! scheduled task: starting a new reveal replaces any in-flight one, so
//! two reveals can never race. Time is passed in by the caller, which
//! keeps the pacing logic testable.

use std::time::{Duration, Instant};

/// Default pacing between revealed characters
pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(12);

/// Progressive reveal state for the newest assistant message
#[derive(Debug, Clone)]
pub struct TypewriterReveal {
    /// Full reply text
    full: String,
    /// Bytes of `full` currently visible (always on a char boundary)
    visible: usize,
    /// Pacing between characters
    interval: Duration,
    /// Last time the reveal advanced
    last_tick: Option<Instant>,
}

impl TypewriterReveal {
    /// An idle reveal with nothing to show
    pub fn idle() -> Self {
        Self::with_interval(DEFAULT_CHAR_INTERVAL)
    }

    /// An idle reveal with custom pacing
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            full: String::new(),
            visible: 0,
            interval,
            last_tick: None,
        }
    }

    /// Start revealing a new message, cancelling any in-flight reveal
    pub fn start(&mut self, text: impl Into<String>) {
        self.full = text.into();
        self.visible = 0;
        self.last_tick = None;
    }

    /// Advance the reveal to `now`; returns whether anything changed
    ///
    /// Multiple characters are released at once when the caller ticks
    /// slower than the configured interval, so pacing is wall-clock
    /// accurate rather than frame-rate dependent.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_done() {
            return false;
        }

        let Some(last) = self.last_tick else {
            // First tick shows the first character immediately
            self.last_tick = Some(now);
            self.advance_chars(1);
            return true;
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed < self.interval {
            return false;
        }

        let steps = if self.interval.is_zero() {
            self.full.len()
        } else {
            (elapsed.as_micros() / self.interval.as_micros().max(1)) as usize
        };
        self.last_tick = Some(now);
        self.advance_chars(steps.max(1));
        true
    }

    fn advance_chars(&mut self, count: usize) {
        let mut remaining = count;
        while remaining > 0 && self.visible < self.full.len() {
            let step = self.full[self.visible..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            self.visible += step;
            remaining -= 1;
        }
    }

    /// Skip to the end of the current message
    pub fn finish(&mut self) {
        self.visible = self.full.len();
    }

    /// The currently visible prefix
    pub fn visible_text(&self) -> &str {
        &self.full[..self.visible]
    }

    /// The full text being revealed
    pub fn full_text(&self) -> &str {
        &self.full
    }

    /// Whether the whole message is visible
    pub fn is_done(&self) -> bool {
        self.visible >= self.full.len()
    }

    /// Whether a reveal is currently in progress
    pub fn is_active(&self) -> bool {
        !self.is_done()
    }
}

impl Default for TypewriterReveal {
    fn default() -> Self {
        Self::idle()
    }
}

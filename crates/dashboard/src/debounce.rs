//! Timer-based input coalescing.

use std::time::{Duration, Instant};

/// Coalesces rapid input changes into a single emission.
///
/// Every [`Debouncer::input`] cancels the pending timer and restarts it from
/// `now`; [`Debouncer::poll`] emits the latest value once the quiet period
/// has elapsed with no further input. There is at most one pending value —
/// intermediate keystrokes are dropped, never queued.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a new value and restart the quiet-period timer.
    pub fn input(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now + self.quiet));
    }

    /// Emit the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

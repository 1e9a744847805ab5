// src/core/debounce.rs
//
// Single-shot cancellable timer. The caller supplies `now`, so the timer
// has no thread or clock of its own; frontends poll it once per frame.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration { self.delay }

    /// Arm the timer to fire `delay` after `now`, replacing anything pending.
    /// Returns true if a pending payload was superseded.
    pub fn schedule(&mut self, now: Instant, payload: T) -> bool {
        self.pending.replace((now + self.delay, payload)).is_some()
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    #[inline]
    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// Time left until the pending payload is due (zero if overdue).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| due.saturating_duration_since(now))
    }

    /// Take the payload if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        let is_due = matches!(&self.pending, Some((due, _)) if *due <= now);
        if is_due { self.cancel() } else { None }
    }

    /// Take the payload immediately, deadline or not.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}

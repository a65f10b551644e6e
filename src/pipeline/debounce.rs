//! Timer-gated admission filter.
//!
//! Holds at most one item. Each push replaces the held item and restarts
//! the quiet period; the item is released only once the period elapses
//! without another push.

use std::time::Duration;

use tokio::time::Instant;

pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Admit `item` at `now`, returning the item it superseded, if any.
    pub fn push(&mut self, item: T, now: Instant) -> Option<T> {
        self.pending
            .replace((item, now + self.quiet))
            .map(|(previous, _)| previous)
    }

    /// When the held item becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Release the held item if its quiet period has elapsed by `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, due)) if due <= now => self.pending.take().map(|(item, _)| item),
            _ => None,
        }
    }

    /// Drop the held item without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(item, _)| item)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

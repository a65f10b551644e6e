//! Cancel-on-new effect slot.
//!
//! Tracks the single operation whose result is still wanted. Starting a
//! new one aborts the old one, and a result is accepted only from the task
//! that currently owns the slot.

use tokio::task::{AbortHandle, Id};

#[derive(Default)]
pub struct SwitchSlot {
    active: Option<AbortHandle>,
}

impl SwitchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handle` the active operation. Returns true if a previous
    /// operation was still running and got aborted.
    pub fn replace(&mut self, handle: AbortHandle) -> bool {
        let superseded = self.cancel();
        self.active = Some(handle);
        superseded
    }

    /// Abort the active operation, if any. Returns true if one was running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Accept the completion of task `id`.
    ///
    /// Returns true and frees the slot only if `id` is the active
    /// operation; completions of superseded tasks return false.
    pub fn settle(&mut self, id: Id) -> bool {
        if self.active.as_ref().is_some_and(|handle| handle.id() == id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}

impl Drop for SwitchSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

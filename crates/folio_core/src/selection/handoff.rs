//! One-shot value handoff between two pages.
//!
//! The About page publishes the clicked skill, the Projects page consumes
//! it once when it is opened. The slot is owned by the caller; it is not
//! ambient global state and not durable storage.

/// Single-use message slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffSlot<T> {
    pending: Option<T>,
}

impl<T> Default for HandoffSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandoffSlot<T> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Publishes `value`, replacing any unconsumed one.
    pub fn put(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Consumes the pending value; the slot is empty afterwards.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//! User-driven selection state.
//!
//! # Responsibility
//! - Model filter clicks as explicit state transitions.
//! - Model the active detail item (selected post).
//! - Carry a skill across one page navigation as a one-shot message.
//!
//! # Invariants
//! - Category and skill filters are mutually exclusive.
//! - Selecting the active category or skill again clears it.
//! - A handed-off value is observed at most once.

pub mod detail;
pub mod handoff;
pub mod state;

pub use detail::DetailSelection;
pub use handoff::HandoffSlot;
pub use state::{KindSelection, SelectionEvent, SelectionState};

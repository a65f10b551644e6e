//! Create-account screen feature module.
//!
//! Submitting the form creates a user; typing an email triggers a
//! debounced availability check.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `event.rs` - Raw view input in domain terms (Submit, EmailChanged)
//! - `action.rs` - Intents plus the per-kind event mappers
//! - `result.rs` - Effect outcomes (InProgress → Success | Error)
//! - `state.rs` - Rendered model (Idle, InProgress, Success, Error)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod event;
mod reducer;
mod result;
mod state;

pub use action::{map_email_changed, map_submit, AccountAction};
pub use event::{AccountEvent, EmailChangedEvent, EventKind, SubmitEvent};
pub use reducer::AccountReducer;
pub use result::{AccountResult, Progress};
pub use state::AccountState;

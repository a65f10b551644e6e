//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits for the unidirectional pipeline
//! that drives every screen.
//!
//! # Architecture
//!
//! ```text
//! View ──→ Event ──→ Intent ──→ Effect ──→ Outcome ──→ Reducer ──→ State ──→ View
//! ```
//!
//! - **Event**: Raw user input, normalized into domain terms
//! - **Intent**: UI-agnostic request derived from an event
//! - **Outcome**: Progress of the side effect an intent triggered
//! - **State**: Immutable representation of what the view renders
//! - **Reducer**: Pure function that folds outcomes into state

mod event;
mod intent;
mod outcome;
mod reducer;
mod state;

pub use event::UiEvent;
pub use intent::Intent;
pub use outcome::Outcome;
pub use reducer::Reducer;
pub use state::UiState;

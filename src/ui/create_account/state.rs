//! State for the create-account screen.

use crate::ui::mvi::UiState;

/// What the create-account view renders.
///
/// Exactly one value is current at a time; it is the fold accumulator of
/// every result seen so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountState {
    /// Nothing pending; inputs enabled.
    #[default]
    Idle,

    /// An effect is pending; inputs disabled, progress shown.
    InProgress,

    /// Account created; the screen closes.
    Success,

    /// Last effect failed; inputs re-enabled and the message shown.
    Error { message: String },
}

impl UiState for AccountState {}

impl AccountState {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

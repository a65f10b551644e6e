//! Outcomes reported by the effect runners.

use crate::service::User;
use crate::ui::mvi::Outcome;

/// Progress of a single effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<T> {
    InProgress,
    Success(T),
    Error(String),
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Progress<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

/// One step of a create-account effect, tagged by the action kind that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountResult {
    /// Account creation. Success carries the new user.
    Submit(Progress<User>),

    /// Email availability check. Success carries availability.
    Check(Progress<bool>),
}

impl Outcome for AccountResult {}

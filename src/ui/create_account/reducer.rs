//! Reducer for the create-account screen.

use crate::ui::mvi::Reducer;

use super::result::{AccountResult, Progress};
use super::state::AccountState;

/// Reducer for create-account state transitions.
///
/// Pure function. The next state depends only on the incoming result:
/// neither flow's outcome is conditioned on the previous state, so the
/// state argument is consumed and dropped.
pub struct AccountReducer;

impl Reducer for AccountReducer {
    type State = AccountState;
    type Outcome = AccountResult;

    fn reduce(_state: Self::State, outcome: Self::Outcome) -> Self::State {
        match outcome {
            AccountResult::Submit(progress) => match progress {
                Progress::InProgress => AccountState::InProgress,
                Progress::Success(_) => AccountState::Success,
                Progress::Error(message) => AccountState::Error { message },
            },

            AccountResult::Check(progress) => match progress {
                Progress::InProgress => AccountState::InProgress,
                Progress::Success(_) => AccountState::Idle,
                Progress::Error(message) => AccountState::Error { message },
            },
        }
    }
}

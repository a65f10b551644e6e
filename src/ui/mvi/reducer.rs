//! Reducer trait for MVI architecture.

use super::outcome::Outcome;
use super::state::UiState;

/// Reducer transforms state based on outcomes.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Outcome) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The outcome type this reducer handles.
    type Outcome: Outcome;

    /// Process an outcome and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, outcome: Self::Outcome) -> Self::State;

    /// Fold a sequence of outcomes from `initial`, returning every
    /// intermediate state in order.
    fn scan<I>(initial: Self::State, outcomes: I) -> Vec<Self::State>
    where
        I: IntoIterator<Item = Self::Outcome>,
    {
        let mut state = initial;
        let mut states = Vec::new();
        for outcome in outcomes {
            state = Self::reduce(state, outcome);
            states.push(state.clone());
        }
        states
    }
}

use super::intent::Intent;
use super::state::UiState;

/// Pure `(state, intent) -> state` transition function for one screen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

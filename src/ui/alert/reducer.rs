use crate::ui::mvi::Reducer;

use super::intent::AlertIntent;
use super::state::AlertState;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A newer failure replaces whatever is on screen.
            AlertIntent::Show { message } => AlertState::Visible { message },
            AlertIntent::Dismiss => AlertState::Hidden,
        }
    }
}

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible {
        message: String,
    },
}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        matches!(self, AlertState::Visible { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            AlertState::Hidden => None,
            AlertState::Visible { message } => Some(message),
        }
    }
}

impl UiState for AlertState {}

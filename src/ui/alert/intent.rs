use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AlertIntent {
    /// A failure arrived while content is visible.
    Show { message: String },
    /// User acknowledged the alert.
    Dismiss,
}

impl Intent for AlertIntent {}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emptiable::{is_empty_by_eq, Emptiable};

/// Icon shown next to failure descriptions.
pub const ERROR_ICON: &str = "!";

/// Payload of the error region: an optional icon and a line of text.
///
/// Also used as the "no content" placeholder; an empty message disables it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Describes a failure for the error region.
    pub fn from_error<E: fmt::Display + ?Sized>(error: &E) -> Self {
        Self::new(error.to_string()).with_icon(ERROR_ICON)
    }
}

impl Emptiable for Message {
    fn empty() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        is_empty_by_eq(self)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "{} {}", icon, self.text),
            None => f.write_str(&self.text),
        }
    }
}

use std::convert::Infallible;

/// Loading, failure and content of an asynchronously loaded value.
///
/// Equality and hashing compare the variant and its full payload, and are
/// only available when both `C` and `E` support them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum State<C, E> {
    /// A load is in flight. Carries the content shown before it started.
    Loading { content: Option<C> },
    /// The last attempt failed. Carries the content shown before it failed.
    Failed { error: E, content: Option<C> },
    /// The last attempt succeeded. Content may itself be empty.
    Present { content: C },
}

/// A state that can never fail.
pub type SafeState<C> = State<C, Infallible>;

/// Payload-free discriminant of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCase {
    Loading,
    Failed,
    Present,
}

impl<C, E> Default for State<C, E> {
    fn default() -> Self {
        Self::Loading { content: None }
    }
}

impl<C, E> From<Result<C, E>> for State<C, E> {
    /// A fresh failure carries no retained content.
    fn from(result: Result<C, E>) -> Self {
        match result {
            Ok(content) => Self::Present { content },
            Err(error) => Self::Failed {
                error,
                content: None,
            },
        }
    }
}

impl<C, E> State<C, E> {
    /// First-load state: `Loading` with nothing to show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from loose parts. An error wins over content; with
    /// neither, the state is a fresh `Loading`.
    pub fn from_parts(content: Option<C>, error: Option<E>) -> Self {
        match (error, content) {
            (Some(error), content) => Self::Failed { error, content },
            (None, Some(content)) => Self::Present { content },
            (None, None) => Self::Loading { content: None },
        }
    }

    /// Content regardless of variant.
    pub fn content(&self) -> Option<&C> {
        match self {
            Self::Loading { content } | Self::Failed { content, .. } => content.as_ref(),
            Self::Present { content } => Some(content),
        }
    }

    pub fn into_content(self) -> Option<C> {
        match self {
            Self::Loading { content } | Self::Failed { content, .. } => content,
            Self::Present { content } => Some(content),
        }
    }

    /// Error payload, only for `Failed`.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed { error, .. } => Some(error),
            Self::Loading { .. } | Self::Present { .. } => None,
        }
    }

    pub fn case(&self) -> StateCase {
        match self {
            Self::Loading { .. } => StateCase::Loading,
            Self::Failed { .. } => StateCase::Failed,
            Self::Present { .. } => StateCase::Present,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.case() == StateCase::Loading
    }

    pub fn is_failed(&self) -> bool {
        self.case() == StateCase::Failed
    }

    pub fn is_present(&self) -> bool {
        self.case() == StateCase::Present
    }

    pub fn as_ref(&self) -> State<&C, &E> {
        match self {
            Self::Loading { content } => State::Loading {
                content: content.as_ref(),
            },
            Self::Failed { error, content } => State::Failed {
                error,
                content: content.as_ref(),
            },
            Self::Present { content } => State::Present { content },
        }
    }

    // Transitions. Each returns the next state and leaves `self` consumed.

    pub fn with_loading(self) -> Self {
        Self::Loading {
            content: self.into_content(),
        }
    }

    pub fn with_content(self, content: C) -> Self {
        Self::Present { content }
    }

    pub fn with_error(self, error: E) -> Self {
        Self::Failed {
            error,
            content: self.into_content(),
        }
    }

    /// `with_content` on success, `with_error` on failure.
    pub fn with_result(self, result: Result<C, E>) -> Self {
        match result {
            Ok(content) => self.with_content(content),
            Err(error) => self.with_error(error),
        }
    }

    /// Drops content and error, restarting on an empty `Loading`.
    pub fn purged(self) -> Self {
        Self::default()
    }

    // In-place counterparts of the transitions above.

    pub fn receive_loading(&mut self) {
        self.replace_with(Self::with_loading);
    }

    pub fn receive_content(&mut self, content: C) {
        self.replace_with(|state| state.with_content(content));
    }

    pub fn receive_error(&mut self, error: E) {
        self.replace_with(|state| state.with_error(error));
    }

    pub fn receive_result(&mut self, result: Result<C, E>) {
        self.replace_with(|state| state.with_result(result));
    }

    pub fn purge(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn replace_with(&mut self, transition: impl FnOnce(Self) -> Self) {
        let current = std::mem::take(self);
        *self = transition(current);
    }

    // Payload mapping. Variants and retention are preserved.

    /// Applies `transform` wherever content is present.
    pub fn map<U>(self, transform: impl FnOnce(C) -> U) -> State<U, E> {
        match self {
            Self::Loading { content } => State::Loading {
                content: content.map(transform),
            },
            Self::Failed { error, content } => State::Failed {
                error,
                content: content.map(transform),
            },
            Self::Present { content } => State::Present {
                content: transform(content),
            },
        }
    }

    /// Applies `transform` to the optional content of every variant. The
    /// resulting state always carries content.
    pub fn map_option<U>(self, transform: impl FnOnce(Option<C>) -> U) -> State<U, E> {
        match self {
            Self::Loading { content } => State::Loading {
                content: Some(transform(content)),
            },
            Self::Failed { error, content } => State::Failed {
                error,
                content: Some(transform(content)),
            },
            Self::Present { content } => State::Present {
                content: transform(Some(content)),
            },
        }
    }

    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> State<C, F> {
        match self {
            Self::Loading { content } => State::Loading { content },
            Self::Failed { error, content } => State::Failed {
                error: transform(error),
                content,
            },
            Self::Present { content } => State::Present { content },
        }
    }
}

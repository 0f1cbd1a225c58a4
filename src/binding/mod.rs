//! Binding dispatch: which presentation region a [`State`] activates.
//!
//! Exactly one of three regions is active at a time: content, error, or
//! loading. [`StateBinder::dispatch`] decides, in this order:
//!
//! 1. Content is known to be empty and a placeholder is configured: the
//!    placeholder is shown in the error region, whatever the variant.
//! 2. `Present`: the content region shows the content.
//! 3. `Loading`: meaningful retained content stays in the content region with a
//!    refreshing overlay; otherwise the loading region is shown.
//! 4. `Failed`: meaningful retained content stays in the content region and
//!    the error is reported separately as an error-with-content; otherwise the
//!    error region shows the failure.
//!
//! "Meaningful" means present and not empty. Emptiness is only known when the
//! binder was built with an emptiness check (see [`StateBinder::emptiable`]).

mod message;
mod view;

pub use message::{Message, ERROR_ICON};
pub use view::{ContentBindable, LoadingRegion, MessageRegion, RegionView, StateView};

use crate::emptiable::Emptiable;
use crate::state::State;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Content,
    Error,
    Loading,
}

/// What the active region receives.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, C, E> {
    /// Content region. `refreshing` asks for a transient loading overlay.
    Content { content: &'a C, refreshing: bool },
    /// Error region showing the "no content" placeholder.
    Placeholder(&'a Message),
    /// Error region showing a failure.
    Error(&'a E),
    /// Loading region.
    Loading,
}

impl<C, E> Presentation<'_, C, E> {
    pub fn region(&self) -> Region {
        match self {
            Presentation::Content { .. } => Region::Content,
            Presentation::Placeholder(_) | Presentation::Error(_) => Region::Error,
            Presentation::Loading => Region::Loading,
        }
    }
}

/// Outcome of dispatching one state.
#[derive(Debug, PartialEq)]
pub struct Dispatch<'a, C, E> {
    pub presentation: Presentation<'a, C, E>,
    /// A failure that arrived while meaningful content stays visible.
    pub error_with_content: Option<&'a E>,
}

impl<'a, C, E> Dispatch<'a, C, E> {
    fn show(presentation: Presentation<'a, C, E>) -> Self {
        Self {
            presentation,
            error_with_content: None,
        }
    }

    pub fn region(&self) -> Region {
        self.presentation.region()
    }
}

/// Maps states to regions according to the module-level precedence.
#[derive(Debug, Clone)]
pub struct StateBinder<C> {
    placeholder: Message,
    emptiness: Option<fn(&C) -> bool>,
}

impl<C> Default for StateBinder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> StateBinder<C> {
    /// A binder for content without an emptiness check. The placeholder
    /// never applies.
    pub fn new() -> Self {
        Self {
            placeholder: Message::default(),
            emptiness: None,
        }
    }

    pub fn with_emptiness(is_empty: fn(&C) -> bool) -> Self {
        Self {
            placeholder: Message::default(),
            emptiness: Some(is_empty),
        }
    }

    pub fn with_placeholder(mut self, placeholder: Message) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn set_placeholder(&mut self, placeholder: Message) {
        self.placeholder = placeholder;
    }

    pub fn placeholder(&self) -> &Message {
        &self.placeholder
    }

    pub fn checks_emptiness(&self) -> bool {
        self.emptiness.is_some()
    }

    fn is_empty_content(&self, content: &C) -> bool {
        self.emptiness.is_some_and(|is_empty| is_empty(content))
    }

    pub fn dispatch<'a, E>(&'a self, state: &'a State<C, E>) -> Dispatch<'a, C, E> {
        let empty = state.content().is_some_and(|content| self.is_empty_content(content));
        if empty && !self.placeholder.is_empty() {
            return Dispatch::show(Presentation::Placeholder(&self.placeholder));
        }

        match state {
            State::Present { content } => Dispatch::show(Presentation::Content {
                content,
                refreshing: false,
            }),
            State::Loading {
                content: Some(content),
            } if !empty => Dispatch::show(Presentation::Content {
                content,
                refreshing: true,
            }),
            State::Loading { .. } => Dispatch::show(Presentation::Loading),
            State::Failed {
                error,
                content: Some(content),
            } if !empty => Dispatch {
                presentation: Presentation::Content {
                    content,
                    refreshing: false,
                },
                error_with_content: Some(error),
            },
            State::Failed { error, .. } => Dispatch::show(Presentation::Error(error)),
        }
    }

    /// Dispatches `state` into `view` and returns the error-with-content, if
    /// any, for out-of-band surfacing.
    pub fn bind<'a, E, V>(&'a self, state: &'a State<C, E>, view: &mut V) -> Option<&'a E>
    where
        V: StateView<C, E> + ?Sized,
    {
        let dispatch = self.dispatch(state);
        match dispatch.presentation {
            Presentation::Content {
                content,
                refreshing,
            } => {
                view.bind_content(content);
                view.set_refreshing(refreshing);
            }
            Presentation::Placeholder(message) => view.bind_message(message),
            Presentation::Error(error) => view.bind_error(error),
            Presentation::Loading => view.bind_loading(),
        }
        dispatch.error_with_content
    }
}

impl<C: Emptiable> StateBinder<C> {
    /// A binder that checks content with [`Emptiable::is_empty`].
    pub fn emptiable() -> Self {
        Self::with_emptiness(<C as Emptiable>::is_empty)
    }
}

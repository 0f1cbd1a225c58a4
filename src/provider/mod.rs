//! Content loading contract and the single-flight reload protocol.
//!
//! A caller implements [`ContentSource`]: one asynchronous attempt per call,
//! reported once through a [`Completion`]. [`ContentProvider`] owns the
//! reload protocol around it:
//!
//! 1. `reload()` publishes `Loading` (keeping retained content) and mints a
//!    new flight token.
//! 2. The source runs one attempt and completes it with content or an error.
//! 3. The result is published only if its token is still the newest one;
//!    results of superseded attempts are discarded.

mod adapters;
mod completion;

pub use adapters::{from_fn, AsyncSource, FnSource};
pub use completion::Completion;

use completion::Flight;

use std::sync::Arc;

use crate::state::State;
use crate::store::{StateStore, Subscription};

/// Performs load attempts on behalf of a [`ContentProvider`].
pub trait ContentSource {
    type Content: Clone;
    type Error: Clone;

    /// Starts exactly one attempt to obtain content.
    ///
    /// The attempt reports its outcome by consuming `completion`, so it can
    /// report at most once. Completing from another thread is allowed; the
    /// store serializes the publish.
    fn load_content(&self, completion: Completion<Self::Content, Self::Error>);
}

/// Drives a [`ContentSource`] against a [`StateStore`].
pub struct ContentProvider<S: ContentSource> {
    source: S,
    state: StateStore<S::Content, S::Error>,
    flight: Arc<Flight>,
}

impl<S: ContentSource> ContentProvider<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, StateStore::new())
    }

    /// Uses an existing store, keeping whatever state it already holds.
    pub fn with_store(source: S, state: StateStore<S::Content, S::Error>) -> Self {
        Self {
            source,
            state,
            flight: Arc::new(Flight::default()),
        }
    }

    pub fn state(&self) -> &StateStore<S::Content, S::Error> {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Token of the newest attempt; 0 before the first reload.
    pub fn current_token(&self) -> u64 {
        self.flight.newest()
    }

    /// Whether the newest attempt has yet to finish. A purge does not end it.
    pub fn is_in_flight(&self) -> bool {
        self.flight.in_flight()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription<S::Content, S::Error>
    where
        F: Fn(&State<S::Content, S::Error>) + Send + Sync + 'static,
    {
        self.state.subscribe(callback)
    }

    /// Publishes `Loading` and starts a new attempt, superseding any attempt
    /// still in flight.
    pub fn reload(&self) {
        let flight = &self.flight;
        let mut token = 0;
        self.state.transition(|state| {
            token = flight.begin();
            state.receive_loading();
            true
        });

        tracing::debug!(token, "Reloading content");
        self.source.load_content(Completion::new(
            token,
            Arc::clone(&self.flight),
            self.state.clone(),
        ));
    }

    /// Drops retained content right away. An attempt already in flight is not
    /// cancelled and still publishes its outcome.
    pub fn purge(&self) {
        tracing::debug!(token = self.current_token(), "Purging content");
        self.state.purge();
    }
}

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::store::StateStore;

/// Attempt tokens shared by a provider and its completions.
///
/// `newest` is the token of the latest reload. `settled` is the highest token
/// whose attempt has finished, whether it completed, was discarded or was
/// dropped.
#[derive(Debug, Default)]
pub(super) struct Flight {
    newest: AtomicU64,
    settled: AtomicU64,
}

impl Flight {
    /// Mints the token for a new attempt.
    pub(super) fn begin(&self) -> u64 {
        self.newest.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(super) fn newest(&self) -> u64 {
        self.newest.load(Ordering::Acquire)
    }

    fn is_current(&self, token: u64) -> bool {
        self.newest() == token
    }

    fn settle(&self, token: u64) {
        self.settled.fetch_max(token, Ordering::AcqRel);
    }

    /// Whether the newest attempt has not finished yet.
    pub(super) fn in_flight(&self) -> bool {
        self.settled.load(Ordering::Acquire) < self.newest()
    }
}

/// One-shot reporter for a single load attempt.
///
/// Consumed by [`complete`](Self::complete), so an attempt reports at most
/// once. The outcome is applied only while the attempt's token is the
/// provider's newest; otherwise it is discarded.
#[must_use = "a load attempt reports its outcome by completing"]
pub struct Completion<C, E> {
    token: u64,
    flight: Arc<Flight>,
    store: Option<StateStore<C, E>>,
}

impl<C, E> Completion<C, E> {
    pub(super) fn new(token: u64, flight: Arc<Flight>, store: StateStore<C, E>) -> Self {
        Self {
            token,
            flight,
            store: Some(store),
        }
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Whether no newer reload has started since this attempt began.
    pub fn is_current(&self) -> bool {
        self.flight.is_current(self.token)
    }
}

impl<C: Clone, E: Clone> Completion<C, E> {
    /// Reports the attempt's outcome.
    pub fn complete(mut self, result: Result<C, E>) {
        let Some(store) = self.store.take() else {
            return;
        };

        let token = self.token;
        let flight = &self.flight;
        let applied = store.transition(move |state| {
            flight.settle(token);
            if !flight.is_current(token) {
                return false;
            }
            state.receive_result(result);
            true
        });

        if applied {
            tracing::debug!(token, "Load attempt completed");
        } else {
            tracing::debug!(
                token,
                newest = self.flight.newest(),
                "Discarding result of superseded load attempt"
            );
        }
    }

    pub fn succeed(self, content: C) {
        self.complete(Ok(content));
    }

    pub fn fail(self, error: E) {
        self.complete(Err(error));
    }
}

impl<C, E> Drop for Completion<C, E> {
    fn drop(&mut self) {
        if self.store.is_some() {
            self.flight.settle(self.token);
            tracing::debug!(token = self.token, "Load attempt dropped without completing");
        }
    }
}

impl<C, E> fmt::Debug for Completion<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("token", &self.token)
            .field("current", &self.is_current())
            .field("completed", &self.store.is_none())
            .finish()
    }
}

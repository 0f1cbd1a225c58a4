//! Shared test fixtures: a recording subscriber, a hand-driven content
//! source and a view that logs what it was asked to show.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use stateful::binding::{Message, StateView};
use stateful::provider::{Completion, ContentSource};
use stateful::state::State;
use stateful::store::{StateStore, Subscription};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError(pub &'static str);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for TestError {}

pub const E: TestError = TestError("This is an error example.");

pub type Numbers = Vec<i64>;
pub type NumbersState = State<Numbers, TestError>;

// -- Recorder -------------------------------------------------------------------

/// Collects every state delivered to its subscriptions.
pub struct Recorder<C, E> {
    seen: Arc<Mutex<Vec<State<C, E>>>>,
}

impl<C, E> Clone for Recorder<C, E> {
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<C, E> Recorder<C, E>
where
    C: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn attach(&self, store: &StateStore<C, E>) -> Subscription<C, E> {
        let seen = Arc::clone(&self.seen);
        store.subscribe(move |state| seen.lock().push(state.clone()))
    }

    pub fn states(&self) -> Vec<State<C, E>> {
        self.seen.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn last(&self) -> Option<State<C, E>> {
        self.seen.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

// -- ManualSource ---------------------------------------------------------------

/// Attempts queued by a [`ManualSource`], completed by the test at will.
pub struct Pending<C, E> {
    queue: Arc<Mutex<VecDeque<Completion<C, E>>>>,
}

impl<C, E> Clone for Pending<C, E> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}

impl<C, E> Pending<C, E> {
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn oldest(&self) -> Completion<C, E> {
        self.queue.lock().pop_front().expect("no pending attempt")
    }

    pub fn newest(&self) -> Completion<C, E> {
        self.queue.lock().pop_back().expect("no pending attempt")
    }
}

/// Content source that parks every attempt until the test completes it.
pub struct ManualSource<C, E> {
    pending: Pending<C, E>,
}

impl<C, E> ManualSource<C, E> {
    pub fn new() -> (Self, Pending<C, E>) {
        let pending = Pending {
            queue: Arc::new(Mutex::new(VecDeque::new())),
        };
        (
            Self {
                pending: pending.clone(),
            },
            pending,
        )
    }
}

impl<C: Clone, E: Clone> ContentSource for ManualSource<C, E> {
    type Content = C;
    type Error = E;

    fn load_content(&self, completion: Completion<C, E>) {
        self.pending.queue.lock().push_back(completion);
    }
}

// -- RecordingView ----------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Content(Numbers),
    Message(Message),
    Error(TestError),
    Loading,
    Refreshing(bool),
}

/// A view that logs each region call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<Bound>,
}

impl RecordingView {
    pub fn take(&mut self) -> Vec<Bound> {
        std::mem::take(&mut self.calls)
    }
}

impl StateView<Numbers, TestError> for RecordingView {
    fn bind_content(&mut self, content: &Numbers) {
        self.calls.push(Bound::Content(content.clone()));
    }

    fn bind_message(&mut self, message: &Message) {
        self.calls.push(Bound::Message(message.clone()));
    }

    fn bind_error(&mut self, error: &TestError) {
        self.calls.push(Bound::Error(error.clone()));
    }

    fn bind_loading(&mut self) {
        self.calls.push(Bound::Loading);
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.calls.push(Bound::Refreshing(refreshing));
    }
}

pub fn placeholder() -> Message {
    Message::new("No numbers loaded.").with_icon("□")
}

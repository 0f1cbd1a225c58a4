//! Ready-made [`ContentSource`] implementations.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::runtime::Handle;

use super::{Completion, ContentSource};

/// A closure used as a content source.
pub struct FnSource<C, E, F> {
    load: F,
    _payload: PhantomData<fn() -> (C, E)>,
}

/// Wraps `load` as a [`ContentSource`].
pub fn from_fn<C, E, F>(load: F) -> FnSource<C, E, F>
where
    C: Clone,
    E: Clone,
    F: Fn(Completion<C, E>),
{
    FnSource {
        load,
        _payload: PhantomData,
    }
}

impl<C, E, F> ContentSource for FnSource<C, E, F>
where
    C: Clone,
    E: Clone,
    F: Fn(Completion<C, E>),
{
    type Content = C;
    type Error = E;

    fn load_content(&self, completion: Completion<C, E>) {
        (self.load)(completion);
    }
}

/// Runs an async load function on a tokio runtime.
///
/// The outcome is published from the runtime's worker thread.
pub struct AsyncSource<C, E, F> {
    runtime: Handle,
    load: Arc<F>,
    _payload: PhantomData<fn() -> (C, E)>,
}

impl<C, E, F> AsyncSource<C, E, F> {
    pub fn new(runtime: Handle, load: F) -> Self {
        Self {
            runtime,
            load: Arc::new(load),
            _payload: PhantomData,
        }
    }

    /// Uses the runtime of the calling context.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn current(load: F) -> Self {
        Self::new(Handle::current(), load)
    }
}

impl<C, E, F, Fut> ContentSource for AsyncSource<C, E, F>
where
    C: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<C, E>> + Send + 'static,
{
    type Content = C;
    type Error = E;

    fn load_content(&self, completion: Completion<C, E>) {
        let load = Arc::clone(&self.load);
        self.runtime.spawn(async move {
            let result = load().await;
            completion.complete(result);
        });
    }
}

//! Presentation controller: provider → binder → view.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::binding::{Message, StateBinder, StateView};
use crate::provider::{ContentProvider, ContentSource};
use crate::state::State;
use crate::store::Subscription;

/// Keeps a view bound to a provider's state.
///
/// Every published state is dispatched into the view. A failure that leaves
/// meaningful content on screen is handed to the error-with-content hook once
/// per published state, so the host can surface it without hiding content.
/// Dropping the controller revokes its subscription.
pub struct StateController<S: ContentSource, V> {
    provider: ContentProvider<S>,
    view: Arc<Mutex<V>>,
    binder: Arc<RwLock<StateBinder<S::Content>>>,
    _subscription: Subscription<S::Content, S::Error>,
}

impl<S, V> StateController<S, V>
where
    S: ContentSource,
    S::Content: Send + 'static,
    S::Error: Send + 'static,
    V: StateView<S::Content, S::Error> + Send + 'static,
{
    pub fn new<H>(
        provider: ContentProvider<S>,
        binder: StateBinder<S::Content>,
        view: V,
        on_error_with_content: H,
    ) -> Self
    where
        H: Fn(&S::Error) + Send + Sync + 'static,
    {
        let view = Arc::new(Mutex::new(view));
        let binder = Arc::new(RwLock::new(binder));

        let subscription = provider.subscribe({
            let view = Arc::clone(&view);
            let binder = Arc::clone(&binder);
            move |state| {
                let alert = {
                    let binder = binder.read();
                    let mut view = view.lock();
                    binder.bind(state, &mut *view).cloned()
                };
                if let Some(error) = alert {
                    tracing::debug!("Load failed while content is visible");
                    on_error_with_content(&error);
                }
            }
        });

        Self {
            provider,
            view,
            binder,
            _subscription: subscription,
        }
    }

    /// Starts a new load attempt.
    pub fn reload(&self) {
        self.provider.reload();
    }

    pub fn purge(&self) {
        self.provider.purge();
    }

    pub fn state(&self) -> State<S::Content, S::Error> {
        self.provider.state().get()
    }

    pub fn provider(&self) -> &ContentProvider<S> {
        &self.provider
    }

    /// Runs `f` with the view locked and returns its result.
    ///
    /// The lock is released before this returns. `f` must not reload, purge,
    /// change the placeholder or publish on this controller's store: those
    /// bind into the same view and would deadlock.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.view.lock())
    }

    pub fn placeholder(&self) -> Message {
        self.binder.read().placeholder().clone()
    }

    /// Replaces the placeholder and re-binds the current state. The
    /// error-with-content hook is not called again.
    pub fn set_placeholder(&self, placeholder: Message) {
        self.binder.write().set_placeholder(placeholder);
        let state = self.state();
        let binder = self.binder.read();
        binder.bind(&state, &mut *self.view.lock());
    }
}

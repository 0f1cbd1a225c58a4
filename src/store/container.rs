use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::subscription::Subscription;
use crate::state::State;

pub(super) type Callback<C, E> = Arc<dyn Fn(&State<C, E>) + Send + Sync>;

/// Shared container holding the current [`State`] and its subscribers.
///
/// Cloning yields another handle to the same container.
pub struct StateStore<C, E> {
    inner: Arc<Inner<C, E>>,
}

pub(super) struct Inner<C, E> {
    pub(super) slot: Mutex<Slot<C, E>>,
    next_id: AtomicU64,
}

pub(super) struct Slot<C, E> {
    value: State<C, E>,
    /// Bumped on every publish.
    revision: u64,
    /// Revision last delivered to every subscriber.
    delivered: u64,
    pub(super) subscribers: Vec<Subscriber<C, E>>,
    /// Subscribers still owed the current value.
    pending_replay: Vec<u64>,
    pub(super) notifying: bool,
}

pub(super) struct Subscriber<C, E> {
    pub(super) id: u64,
    active: Arc<AtomicBool>,
    callback: Callback<C, E>,
}

impl<C, E> Slot<C, E> {
    /// Removes revoked subscribers and hands them back so they can be
    /// dropped outside the lock.
    fn take_revoked(&mut self) -> Vec<Subscriber<C, E>> {
        let (live, revoked) = std::mem::take(&mut self.subscribers)
            .into_iter()
            .partition(|subscriber| subscriber.active.load(Ordering::Acquire));
        self.subscribers = live;
        revoked
    }
}

impl<C, E> Clone for StateStore<C, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, E> Default for StateStore<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> StateStore<C, E> {
    /// Creates a store holding a fresh `Loading` state.
    pub fn new() -> Self {
        Self::with_state(State::default())
    }

    pub fn with_state(state: State<C, E>) -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(Slot {
                    value: state,
                    revision: 0,
                    delivered: 0,
                    subscribers: Vec::new(),
                    pending_replay: Vec::new(),
                    notifying: false,
                }),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Reads the current state without cloning it.
    ///
    /// The store is locked while `read` runs; calling back into the store from
    /// `read` deadlocks.
    pub fn read<R>(&self, read: impl FnOnce(&State<C, E>) -> R) -> R {
        read(&self.inner.slot.lock().value)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .slot
            .lock()
            .subscribers
            .iter()
            .filter(|subscriber| subscriber.active.load(Ordering::Acquire))
            .count()
    }

    /// Whether both handles point at the same container.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: Clone, E: Clone> StateStore<C, E> {
    pub fn get(&self) -> State<C, E> {
        self.inner.slot.lock().value.clone()
    }

    /// Registers `callback` and delivers the current state to it.
    ///
    /// The replay is part of the store's serialized notification: called
    /// outside a pass, it runs before `subscribe` returns; called while a pass
    /// is running, that pass delivers it once its current round ends. Either
    /// way the replay never arrives after a newer state. Delivery stops once
    /// the returned [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<C, E>
    where
        F: Fn(&State<C, E>) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        let subscription = Subscription::new(id, Arc::clone(&active), Arc::downgrade(&self.inner));

        let mut slot = self.inner.slot.lock();
        slot.subscribers.push(Subscriber {
            id,
            active,
            callback: Arc::new(callback),
        });
        slot.pending_replay.push(id);
        tracing::trace!(subscription = id, "Subscriber added");

        if slot.notifying {
            tracing::trace!(subscription = id, "Replay deferred to the running pass");
        } else {
            slot.notifying = true;
            Self::drain(slot);
        }
        subscription
    }

    /// Replaces the current state and notifies subscribers.
    pub fn set(&self, state: State<C, E>) {
        self.transition(move |current| {
            *current = state;
            true
        });
    }

    pub fn publish_loading(&self) {
        self.transition(|state| {
            state.receive_loading();
            true
        });
    }

    pub fn publish_error(&self, error: E) {
        self.transition(move |state| {
            state.receive_error(error);
            true
        });
    }

    pub fn publish_content(&self, content: C) {
        self.transition(move |state| {
            state.receive_content(content);
            true
        });
    }

    pub fn publish_result(&self, result: Result<C, E>) {
        self.transition(move |state| {
            state.receive_result(result);
            true
        });
    }

    /// Drops retained content and error, publishing an empty `Loading`.
    pub fn purge(&self) {
        self.transition(|state| {
            state.purge();
            true
        });
    }

    /// Applies `apply` under the store lock and, when it reports a change,
    /// publishes the result. Returns whether anything was published.
    pub(crate) fn transition<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&mut State<C, E>) -> bool,
    {
        let mut slot = self.inner.slot.lock();
        if !apply(&mut slot.value) {
            return false;
        }
        slot.revision = slot.revision.wrapping_add(1);

        if slot.notifying {
            tracing::trace!("Publish during notification, deferred to next pass");
            return true;
        }

        slot.notifying = true;
        Self::drain(slot);
        true
    }

    /// Delivers until nothing is owed: a full pass for every new revision,
    /// otherwise the current value to subscribers waiting for their replay.
    /// The caller has claimed `notifying`; it is released on exit or unwind.
    fn drain(slot: MutexGuard<'_, Slot<C, E>>) {
        let mut slot = scopeguard::guard(slot, |mut slot| slot.notifying = false);
        loop {
            let replay_only = if slot.revision != slot.delivered {
                slot.delivered = slot.revision;
                slot.pending_replay.clear();
                None
            } else if !slot.pending_replay.is_empty() {
                Some(std::mem::take(&mut slot.pending_replay))
            } else {
                break;
            };

            let revoked = slot.take_revoked();
            let value = slot.value.clone();
            let pass: Vec<(Arc<AtomicBool>, Callback<C, E>)> = slot
                .subscribers
                .iter()
                .filter(|subscriber| {
                    replay_only
                        .as_ref()
                        .map_or(true, |ids| ids.contains(&subscriber.id))
                })
                .map(|subscriber| {
                    (
                        Arc::clone(&subscriber.active),
                        Arc::clone(&subscriber.callback),
                    )
                })
                .collect();

            tracing::trace!(
                case = ?value.case(),
                subscribers = pass.len(),
                replay = replay_only.is_some(),
                "Publishing state"
            );

            MutexGuard::unlocked(&mut *slot, move || {
                drop(revoked);
                for (active, callback) in &pass {
                    if active.load(Ordering::Acquire) {
                        callback(&value);
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn panicking_subscriber_does_not_wedge_the_store() {
        let store = StateStore::<u8, ()>::new();
        let _subscription = store.subscribe(|state| {
            if state.content() == Some(&1) {
                panic!("subscriber failure");
            }
        });

        let result = catch_unwind(AssertUnwindSafe(|| store.publish_content(1)));
        assert!(result.is_err());
        assert!(!store.inner.slot.lock().notifying);

        store.publish_content(2);
        assert_eq!(store.get(), State::Present { content: 2 });
    }

    #[test]
    fn revoked_during_pass_is_compacted_on_next_publish() {
        let store = StateStore::<u8, ()>::new();
        let handle = Arc::new(parking_lot::Mutex::new(None));
        let _revoker = store.subscribe({
            let handle = Arc::clone(&handle);
            move |state| {
                if state.is_present() {
                    handle.lock().take();
                }
            }
        });
        *handle.lock() = Some(store.subscribe(|_| {}));
        assert_eq!(store.inner.slot.lock().subscribers.len(), 2);

        store.publish_content(1);
        // Still listed, but no longer counted.
        assert_eq!(store.inner.slot.lock().subscribers.len(), 2);
        assert_eq!(store.subscriber_count(), 1);

        store.publish_content(2);
        assert_eq!(store.inner.slot.lock().subscribers.len(), 1);
    }

    #[test]
    fn rejected_transition_notifies_nobody() {
        let store = StateStore::<u8, ()>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let _subscription = store.subscribe({
            let calls = Arc::clone(&calls);
            move |_| {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        });

        assert!(!store.transition(|_| false));
        assert!(store.transition(|state| {
            state.receive_content(1);
            true
        }));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use super::container::Inner;

/// Handle to a registered subscriber.
///
/// Dropping the handle revokes the subscription: the callback is never called
/// again, even when revoked in the middle of a notification pass.
#[must_use = "dropping a Subscription immediately revokes it"]
pub struct Subscription<C, E> {
    id: u64,
    active: Arc<AtomicBool>,
    store: Weak<Inner<C, E>>,
}

impl<C, E> Subscription<C, E> {
    pub(super) fn new(id: u64, active: Arc<AtomicBool>, store: Weak<Inner<C, E>>) -> Self {
        Self { id, active, store }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// False once revoked or once the store is gone.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) && self.store.strong_count() > 0
    }

    /// Revokes the subscription. Same as dropping it.
    pub fn unsubscribe(self) {}
}

impl<C, E> Drop for Subscription<C, E> {
    fn drop(&mut self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        let Some(inner) = self.store.upgrade() else {
            return;
        };

        let removed = {
            let mut slot = inner.slot.lock();
            if slot.notifying {
                // The running pass skips it and compacts the list afterwards.
                None
            } else {
                slot.subscribers
                    .iter()
                    .position(|subscriber| subscriber.id == self.id)
                    .map(|index| slot.subscribers.remove(index))
            }
        };
        drop(removed);
        tracing::trace!(subscription = self.id, "Subscription revoked");
    }
}

impl<C, E> fmt::Debug for Subscription<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

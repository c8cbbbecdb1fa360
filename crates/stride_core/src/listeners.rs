//! Listener registry
//!
//! Slot-keyed callback storage shared by the scheme sources, the auth
//! session and anything else that hands out unsubscribe handles. Removing a
//! key never disturbs other registrations, and a stale key (already removed)
//! is simply ignored.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle identifying one registered listener
    pub struct ListenerKey;
}

/// A set of listeners addressed by [`ListenerKey`]
///
/// `L` is normally an `Arc<dyn Fn(..) + Send + Sync>` so that
/// [`snapshot`](Self::snapshot) can clone the callbacks out and invoke them
/// without holding whatever lock guards the set.
pub struct ListenerSet<L> {
    listeners: SlotMap<ListenerKey, L>,
}

impl<L> ListenerSet<L> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener
    pub fn insert(&mut self, listener: L) -> ListenerKey {
        self.listeners.insert(listener)
    }

    /// Unregister a listener; returns it if the key was still live
    pub fn remove(&mut self, key: ListenerKey) -> Option<L> {
        self.listeners.remove(key)
    }

    /// Check whether a key is still registered
    pub fn contains(&self, key: ListenerKey) -> bool {
        self.listeners.contains_key(key)
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<L: Clone> ListenerSet<L> {
    /// Clone the current listeners out for dispatch
    pub fn snapshot(&self) -> SmallVec<[L; 4]> {
        self.listeners.values().cloned().collect()
    }
}

impl<L> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposer returned by every `subscribe` in the workspace
///
/// Calling [`unsubscribe`](Self::unsubscribe) detaches the listener; calling
/// it again is a no-op. Dropping the handle also detaches.
#[must_use = "dropping a Subscription detaches the listener immediately"]
pub struct Subscription {
    disposer: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a detach action
    pub fn new<F: FnOnce() + Send + 'static>(disposer: F) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
        }
    }

    /// A handle with nothing to detach (used when registration failed)
    pub fn inert() -> Self {
        Self { disposer: None }
    }

    /// Detach the listener; idempotent
    pub fn unsubscribe(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }

    /// True until the listener has been detached
    pub fn is_active(&self) -> bool {
        self.disposer.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

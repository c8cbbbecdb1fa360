//! Authentication collaborator
//!
//! The engine only reads the signed-in user and watches it change. Listeners
//! receive `(new, old)` pairs: once immediately on subscribe (with no old
//! value) and again on every change.

use crate::identity::{Partner, UserInfo};
use std::sync::{Arc, Mutex, RwLock};
use stride_core::sync::{lock, read, write};
use stride_core::{ListenerSet, Subscription};

/// Called with `(new_user, old_user)`
pub type UserListener = Arc<dyn Fn(Option<&UserInfo>, Option<&UserInfo>) + Send + Sync>;

/// Source of the current user
pub trait AuthSource: Send + Sync {
    fn current_user(&self) -> Option<UserInfo>;

    /// Watch the user; `listener(current, None)` runs before this returns
    fn subscribe(&self, listener: UserListener) -> Subscription;
}

struct SessionInner {
    user: RwLock<Option<UserInfo>>,
    listeners: Mutex<ListenerSet<UserListener>>,
}

/// In-memory session store
///
/// Cloning shares the session. Setting a user equal to the current one is
/// not a change and notifies nobody.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_user(None)
    }

    pub fn with_user(user: Option<UserInfo>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                user: RwLock::new(user),
                listeners: Mutex::new(ListenerSet::new()),
            }),
        }
    }

    /// Replace the current user, notifying listeners on change
    pub fn set_user(&self, user: Option<UserInfo>) {
        let old = {
            let mut current = write(&self.inner.user);
            if *current == user {
                return;
            }
            std::mem::replace(&mut *current, user.clone())
        };

        tracing::debug!(
            "SessionStore::set_user - partner {:?} -> {:?}",
            old.as_ref().and_then(|u| u.partner.as_ref()).and_then(|p| p.id),
            user.as_ref().and_then(|u| u.partner.as_ref()).and_then(|p| p.id)
        );

        let listeners = lock(&self.inner.listeners).snapshot();
        for listener in listeners {
            listener(user.as_ref(), old.as_ref());
        }
    }

    pub fn login(&self, user: UserInfo) {
        self.set_user(Some(user));
    }

    pub fn logout(&self) {
        self.set_user(None);
    }

    /// Swap the signed-in user's partner (e.g. after a profile refresh)
    ///
    /// Does nothing when nobody is signed in.
    pub fn update_partner(&self, partner: Option<Partner>) {
        let Some(mut user) = self.current_user() else {
            return;
        };
        user.partner = partner;
        self.set_user(Some(user));
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSource for SessionStore {
    fn current_user(&self) -> Option<UserInfo> {
        read(&self.inner.user).clone()
    }

    fn subscribe(&self, listener: UserListener) -> Subscription {
        let current = self.current_user();
        listener(current.as_ref(), None);

        let key = lock(&self.inner.listeners).insert(listener);
        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                lock(&inner.listeners).remove(key);
            }
        })
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &*read(&self.inner.user))
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Arc<Mutex<Vec<(Option<u64>, Option<u64>)>>>;

    fn watch(session: &SessionStore) -> (Seen, Subscription) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let sub = session.subscribe(Arc::new(
            move |new: Option<&UserInfo>, old: Option<&UserInfo>| {
                sink.lock()
                    .unwrap()
                    .push((new.and_then(|u| u.id), old.and_then(|u| u.id)));
            },
        ));
        (seen, sub)
    }

    fn user(id: u64) -> UserInfo {
        UserInfo {
            id: Some(id),
            ..UserInfo::default()
        }
    }

    #[test]
    fn test_subscribe_fires_immediately() {
        let session = SessionStore::with_user(Some(user(1)));
        let (seen, _sub) = watch(&session);
        assert_eq!(*seen.lock().unwrap(), vec![(Some(1), None)]);
    }

    #[test]
    fn test_changes_deliver_new_and_old() {
        let session = SessionStore::new();
        let (seen, _sub) = watch(&session);

        session.login(user(1));
        session.login(user(1));
        session.login(user(2));
        session.logout();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (None, None),
                (Some(1), None),
                (Some(2), Some(1)),
                (None, Some(2)),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_detaches() {
        let session = SessionStore::new();
        let (seen, mut sub) = watch(&session);
        assert_eq!(session.listener_count(), 1);

        sub.unsubscribe();
        assert_eq!(session.listener_count(), 0);
        session.login(user(3));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_update_partner_requires_user() {
        let session = SessionStore::new();
        session.update_partner(Some(Partner::default()));
        assert_eq!(session.current_user(), None);

        session.login(user(4));
        session.update_partner(Some(Partner {
            id: Some(9),
            ..Partner::default()
        }));
        assert_eq!(session.current_user().unwrap().partner.unwrap().id, Some(9));
    }
}

//! # Session store with explicit change notification
//!
//! [`SessionStore`] owns the [`Session`] for the lifetime of the page and keeps
//! the token mirrored into a [`TokenStore`]. Views get a [`SessionHandle`]
//! passed to them explicitly and [`subscribe`](SessionStore::subscribe) to be
//! told about every change; nothing is looked up from ambient global state.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`new`](SessionStore::new) | Reads any persisted token. The user record is never restored. |
//! | [`login`](SessionStore::login) | Sets token and user together, persists the token, notifies. |
//! | [`logout`](SessionStore::logout) | Clears token and user together, removes the persisted token, notifies. |
//! | [`subscribe`](SessionStore::subscribe) / [`unsubscribe`](SessionStore::unsubscribe) | Register or drop a listener. |
//!
//! ## Threading
//!
//! The store lives on the single UI thread. Interior mutability is `RefCell`
//! based and the handle is an `Rc`; no locks are involved. Listeners are
//! called synchronously after the state change, outside of any borrow, so a
//! listener may read the store or (un)subscribe.
//!
//! A persisted token is not validated here. An expired token surfaces as an
//! unauthorized API response, and the view layer reacts by calling
//! [`logout`](SessionStore::logout).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::models::{Session, SessionUser};
use crate::tokens::TokenStore;

/// Identifies a listener registered with [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&Session)>;

/// Owner of the client session and its persisted token.
pub struct SessionStore {
    tokens: Box<dyn TokenStore>,
    session: RefCell<Session>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl SessionStore {
    /// Create a store, rehydrating the token from `tokens`.
    pub fn new(tokens: impl TokenStore + 'static) -> Self {
        let token = tokens.load();
        if token.is_some() {
            tracing::debug!("Rehydrated session token from storage");
        }
        Self {
            tokens: Box::new(tokens),
            session: RefCell::new(Session::rehydrated(token)),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Snapshot of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    /// Current user record, if known.
    pub fn user(&self) -> Option<SessionUser> {
        self.session.borrow().user.clone()
    }

    pub fn login(&self, token: impl Into<String>, user: SessionUser) {
        let token = token.into();
        self.tokens.save(&token);
        *self.session.borrow_mut() = Session {
            token: Some(token),
            user: Some(user),
        };
        tracing::info!("Session started");
        self.notify();
    }

    pub fn logout(&self) {
        self.tokens.clear();
        *self.session.borrow_mut() = Session::default();
        tracing::info!("Session ended");
        self.notify();
    }

    /// Register `listener` to be called with the new session after every change.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }

    fn notify(&self) {
        let session = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&session);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.session.borrow().is_authenticated())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

/// Shared handle to a [`SessionStore`], cheap to clone and pass as a prop.
///
/// Two handles are equal when they point at the same store.
#[derive(Clone, Debug)]
pub struct SessionHandle(Rc<SessionStore>);

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SessionHandle {
    type Target = SessionStore;

    fn deref(&self) -> &SessionStore {
        &self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn user(phone: &str) -> SessionUser {
        SessionUser {
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_login_sets_token_and_user() {
        let tokens = MemoryStore::new();
        let store = SessionStore::new(tokens.clone());
        assert_eq!(store.snapshot(), Session::default());

        store.login("abc", user("+91 98765 43210"));

        assert_eq!(store.token().as_deref(), Some("abc"));
        assert_eq!(store.user(), Some(user("+91 98765 43210")));
        assert_eq!(tokens.load().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let tokens = MemoryStore::new();
        let store = SessionStore::new(tokens.clone());
        store.login("abc", user("9876543210"));

        store.logout();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(tokens.load().is_none());
    }

    #[test]
    fn test_rehydrates_token_but_not_user() {
        let tokens = MemoryStore::new();
        {
            let store = SessionStore::new(tokens.clone());
            store.login("abc", user("9876543210"));
        }

        // Simulate a reload: a fresh store over the same persistent slot
        let reloaded = SessionStore::new(tokens);
        assert_eq!(reloaded.token().as_deref(), Some("abc"));
        assert!(reloaded.user().is_none());
        assert!(reloaded.snapshot().is_authenticated());
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let store = SessionStore::new(MemoryStore::new());
        let seen: Rc<RefCell<Vec<Session>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |s| sink.borrow_mut().push(s.clone()));

        store.login("abc", user("9876543210"));
        store.logout();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].token.as_deref(), Some("abc"));
        assert_eq!(seen[0].phone(), Some("9876543210"));
        assert_eq!(seen[1], Session::default());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = SessionStore::new(MemoryStore::new());
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));
        let other = Rc::clone(&calls);
        store.subscribe(move |_| other.set(other.get() + 10));

        store.login("abc", user("1"));
        assert_eq!(calls.get(), 11);

        store.unsubscribe(id);
        store.logout();
        assert_eq!(calls.get(), 21);
    }

    #[test]
    fn test_listener_may_read_store() {
        let handle = SessionHandle::new(SessionStore::new(MemoryStore::new()));
        let observed = Rc::new(RefCell::new(None));

        let inner = handle.clone();
        let slot = Rc::clone(&observed);
        handle.subscribe(move |_| *slot.borrow_mut() = inner.token());

        handle.login("abc", user("1"));
        assert_eq!(observed.borrow().as_deref(), Some("abc"));
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = SessionHandle::new(SessionStore::new(MemoryStore::new()));
        let b = SessionHandle::new(SessionStore::new(MemoryStore::new()));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}

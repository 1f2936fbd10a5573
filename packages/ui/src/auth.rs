//! Session hooks and controls for the UI.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use store::{Session, SessionHandle, SubscriptionId};

/// A listener registered on one session store, removed when dropped.
struct Subscription {
    session: SessionHandle,
    id: SubscriptionId,
}

impl Subscription {
    fn new(session: &SessionHandle, listener: impl Fn(&Session) + 'static) -> Self {
        Self {
            session: session.clone(),
            id: session.subscribe(listener),
        }
    }

    fn is_for(&self, session: &SessionHandle) -> bool {
        self.session == *session
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.session.unsubscribe(self.id);
    }
}

/// Subscribe the calling component to `session`.
///
/// Returns a signal holding the latest [`Session`] snapshot. It is updated by
/// the store's change notification, so components re-render on login and
/// logout. If the component is later given a different handle, the old store
/// is released and the signal follows the new one. The subscription is
/// dropped with the component.
pub fn use_session(session: &SessionHandle) -> Signal<Session> {
    let mut state = use_signal(|| session.snapshot());
    let current = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    let stale = current.borrow().as_ref().map_or(true, |sub| !sub.is_for(session));
    if stale {
        let next = Subscription::new(session, move |next| {
            let mut state = state;
            state.set(next.clone());
        });
        let previous = current.borrow_mut().replace(next);
        if previous.is_some() {
            state.set(session.snapshot());
        }
    }

    use_drop(move || {
        current.borrow_mut().take();
    });

    state
}

/// Button that ends the session.
#[component]
pub fn LogoutButton(
    session: SessionHandle,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let onclick = move |_| {
        session.logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::{MemoryStore, SessionStore, SessionUser};

    use super::*;

    fn handle() -> SessionHandle {
        SessionHandle::new(SessionStore::new(MemoryStore::new()))
    }

    fn user() -> SessionUser {
        SessionUser {
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_subscription_ends_on_drop() {
        let session = handle();
        let calls = Rc::new(Cell::new(0));

        let sub = {
            let calls = calls.clone();
            Subscription::new(&session, move |_| calls.set(calls.get() + 1))
        };
        session.login("abc", user());
        assert_eq!(calls.get(), 1);

        drop(sub);
        session.logout();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_swapping_handles_releases_old_store() {
        let first = handle();
        let second = handle();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener = |seen: Rc<RefCell<Vec<Option<String>>>>| {
            move |s: &Session| seen.borrow_mut().push(s.token.clone())
        };

        let mut sub = Subscription::new(&first, listener(seen.clone()));
        assert!(sub.is_for(&first));
        assert!(!sub.is_for(&second));

        // Assigning drops the first subscription
        sub = Subscription::new(&second, listener(seen.clone()));
        assert!(sub.is_for(&second));
        first.login("old", user());
        second.login("new", user());

        assert_eq!(*seen.borrow(), vec![Some("new".to_string())]);
    }
}

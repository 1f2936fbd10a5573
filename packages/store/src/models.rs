//! # Session model
//!
//! The client-side record of who is logged in.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Session`] | The bearer token plus the user record it was issued to. Both are set together by a login and cleared together by a logout. |
//! | [`SessionUser`] | What the client knows about the user: the phone number typed at login. |
//!
//! Only the token is persisted. A session rebuilt after a reload therefore has
//! a token but no [`SessionUser`] until the next login.

use serde::{Deserialize, Serialize};

/// User record held alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub phone: String,
}

/// Current authentication state of the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    /// A session rebuilt from a persisted token. The user record is not
    /// persisted, so it is left empty.
    pub fn rehydrated(token: Option<String>) -> Self {
        Self { token, user: None }
    }

    /// Whether a bearer token is available for outgoing requests.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Phone number of the logged-in user, if known in this page session.
    pub fn phone(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.phone.as_str())
    }
}

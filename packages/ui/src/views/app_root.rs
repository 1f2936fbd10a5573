use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionHandle};

use super::{AppShell, LoginView};
use crate::use_session;

/// Top-level screen switch: the login screen without a token, the app shell
/// with one. A token rehydrated from storage goes straight to the shell.
#[component]
pub fn AppRoot(session: SessionHandle, api: ApiClient, config: ClientConfig) -> Element {
    let state = use_session(&session);

    rsx! {
        document::Stylesheet { href: crate::MAXHOME_CSS }

        if state().is_authenticated() {
            AppShell { session: session.clone(), api: api.clone(), config: config.clone() }
        } else {
            LoginView { session: session.clone(), api: api.clone() }
        }
    }
}

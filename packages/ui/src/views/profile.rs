use dioxus::prelude::*;
use store::SessionHandle;

use crate::use_session;

/// Patient profile. Only the phone used to log in is known on the client, and
/// only until the page is reloaded.
#[component]
pub fn ProfileView(session: SessionHandle) -> Element {
    let state = use_session(&session);
    let phone = state().phone().map(str::to_string);

    rsx! {
        section {
            class: "card",
            h2 { "Patient Profile" }
            if let Some(phone) = phone {
                p { class: "profile-phone", "Phone: {phone}" }
            }
            p { class: "muted", "Profile management coming soon..." }
        }
    }
}

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionHandle};

use super::{BookingView, DashboardView, ProfileView};
use crate::icons::FaPhone;
use crate::{Icon, NavState, Navbar, OnlineIndicator, Page};

/// Logged-in layout: header navigation, the active screen, footer.
#[component]
pub fn AppShell(session: SessionHandle, api: ApiClient, config: ClientConfig) -> Element {
    let nav_state = use_signal(NavState::default);

    let page = match nav_state().page {
        Page::Dashboard => rsx! {
            DashboardView { session: session.clone(), api: api.clone() }
        },
        Page::Booking => rsx! {
            BookingView {
                session: session.clone(),
                api: api.clone(),
                patient_id: config.booking.patient_id,
            }
        },
        Page::Profile => rsx! {
            ProfileView { session: session.clone() }
        },
    };

    rsx! {
        div {
            class: "app-shell",

            Navbar {
                nav_state,
                session: session.clone(),
                OnlineIndicator {
                    api: api.clone(),
                    interval_secs: config.api.health_check_interval_secs,
                }
            }

            main { class: "app-main", {page} }

            footer {
                class: "app-footer",
                p {
                    class: "footer-emergency",
                    Icon { icon: FaPhone, width: 14, height: 14 }
                    span { "24/7 Emergency: 1800-123-4567" }
                }
                p { class: "footer-note", "© 2026 MAX@Home. Healthcare at Your Doorstep." }
            }
        }
    }
}

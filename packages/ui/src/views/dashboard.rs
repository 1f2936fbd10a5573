use api::ApiClient;
use dioxus::prelude::*;
use store::SessionHandle;

use crate::dashboard::{
    booking_rows, dashboard_stats, load_bookings, DashboardStat, StatTone,
    EMPTY_BOOKINGS_MESSAGE,
};
use crate::icons::{FaCalendar, FaCircleCheck, FaHeartPulse, FaLocationDot, FaUsers};
use crate::{use_session, Icon};

/// Stat cards and the patient's bookings, fetched on every visit.
#[component]
pub fn DashboardView(session: SessionHandle, api: ApiClient) -> Element {
    let state = use_session(&session);

    let bookings = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        async move {
            // Read through the signal so the list reloads when the token changes
            if state.read().token.is_none() {
                return Vec::new();
            }
            load_bookings(&api, &session).await
        }
    });

    let loaded = bookings.read().clone();
    let stats = dashboard_stats(loaded.as_ref().map_or(0, Vec::len));

    let content = match loaded {
        None => rsx! {
            p { class: "muted", "Loading bookings..." }
        },
        Some(list) if list.is_empty() => rsx! {
            div {
                class: "empty-state",
                Icon { icon: FaCalendar, width: 64, height: 64, class: "empty-icon" }
                p { "{EMPTY_BOOKINGS_MESSAGE}" }
            }
        },
        Some(list) => rsx! {
            div {
                class: "booking-list",
                for row in booking_rows(&list) {
                    div {
                        key: "{row.key}",
                        class: "booking-row",
                        div {
                            class: "booking-row-main",
                            div {
                                class: "booking-row-icon",
                                Icon { icon: FaHeartPulse, width: 24, height: 24 }
                            }
                            div {
                                p { class: "booking-service", "{row.service}" }
                                p { class: "muted", "{row.reference}" }
                            }
                        }
                        Icon { icon: FaCircleCheck, width: 24, height: 24, class: "booking-ok" }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "dashboard",

            div {
                class: "stat-grid",
                for stat in stats {
                    StatCard { key: "{stat.label}", stat }
                }
            }

            section {
                class: "card",
                h2 { "Recent Bookings" }
                {content}
            }
        }
    }
}

#[component]
fn StatCard(stat: DashboardStat) -> Element {
    let icon = match stat.tone {
        StatTone::Blue => rsx! { Icon { icon: FaCalendar, width: 32, height: 32 } },
        StatTone::Green => rsx! { Icon { icon: FaHeartPulse, width: 32, height: 32 } },
        StatTone::Purple => rsx! { Icon { icon: FaUsers, width: 32, height: 32 } },
        StatTone::Orange => rsx! { Icon { icon: FaLocationDot, width: 32, height: 32 } },
    };

    rsx! {
        div {
            class: "card stat-card",
            div {
                p { class: "muted", "{stat.label}" }
                p { class: "stat-value", "{stat.value}" }
            }
            div { class: stat.tone.class(), {icon} }
        }
    }
}

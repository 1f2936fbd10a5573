//! Online/offline status indicator for the header.

use std::time::Duration;

use api::ApiClient;
use dioxus::prelude::*;

use crate::icons::{FaCloud, FaTriangleExclamation};
use crate::Icon;

/// A small icon that shows whether the backend answers `/health`.
///
/// - **Online**: cloud icon
/// - **Offline**: warning icon
///
/// Checks once on mount and then every `interval_secs`. An interval of 0
/// disables the indicator.
#[component]
pub fn OnlineIndicator(api: ApiClient, interval_secs: u32) -> Element {
    let mut online = use_signal(|| Option::<bool>::None);

    use_effect(move || {
        if interval_secs == 0 {
            return;
        }
        let api = api.clone();
        spawn(async move {
            loop {
                let reachable = match api.health().await {
                    Ok(status) => status.is_ok(),
                    Err(e) => {
                        tracing::debug!("Health check failed: {}", e);
                        false
                    }
                };
                if online() != Some(reachable) {
                    online.set(Some(reachable));
                }

                let period = Duration::from_secs(u64::from(interval_secs));
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(period).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(period).await;
            }
        });
    });

    match online() {
        None => rsx! {},
        Some(true) => rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Online",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        },
        Some(false) => rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Service unreachable",
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
        },
    }
}

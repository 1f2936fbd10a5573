use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionHandle, SessionStore};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Defaults, with the API base optionally baked in at build time
/// (`MAXHOME_API_BASE=https://api.example.in dx build --platform web`).
fn client_config() -> ClientConfig {
    let config = ClientConfig::default();
    match option_env!("MAXHOME_API_BASE") {
        Some(base) => config.with_base_url(base),
        None => config,
    }
}

/// Session backed by browser localStorage, so the token survives reloads.
#[cfg(target_arch = "wasm32")]
fn make_session(config: &ClientConfig) -> SessionHandle {
    let tokens = store::LocalStorageStore::new(config.storage.token_key.clone());
    SessionHandle::new(SessionStore::new(tokens))
}

/// Outside the browser there is no localStorage; the session lasts as long as
/// the process.
#[cfg(not(target_arch = "wasm32"))]
fn make_session(_config: &ClientConfig) -> SessionHandle {
    SessionHandle::new(SessionStore::new(store::MemoryStore::new()))
}

#[component]
fn App() -> Element {
    let config = use_hook(client_config);
    let session = use_hook(|| make_session(&config));
    let api = use_hook(|| ApiClient::new(config.api.base_url.clone()));

    use_hook(|| tracing::info!("Using API at {}", api.base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::views::AppRoot { session, api, config }
    }
}

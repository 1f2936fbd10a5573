use api::ApiClient;
use dioxus::prelude::*;
use store::{FileStore, SessionHandle, SessionStore};

mod config;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);
    let session = use_hook(|| {
        let tokens = FileStore::new(config::data_dir());
        SessionHandle::new(SessionStore::new(tokens))
    });
    let api = use_hook(|| ApiClient::new(config.api.base_url.clone()));

    rsx! {
        ui::views::AppRoot { session, api, config }
    }
}

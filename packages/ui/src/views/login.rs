//! Login screen with a switch to the registration form.

use api::ApiClient;
use dioxus::prelude::*;
use store::{SessionHandle, SessionUser};

use super::RegisterForm;
use crate::alert::{AlertDialog, LOGIN_FAILED};
use crate::icons::FaHeart;
use crate::Icon;

/// Login page component. Registration is a second mode of the same card.
#[component]
pub fn LoginView(session: SessionHandle, api: ApiClient) -> Element {
    let mut registering = use_signal(|| false);

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                div {
                    class: "auth-brand",
                    Icon { icon: FaHeart, width: 64, height: 64, class: "brand-icon" }
                    h1 { "MAX@Home" }
                    p { "Healthcare at Your Doorstep" }
                }

                if registering() {
                    RegisterForm {
                        api: api.clone(),
                        on_registered: move |_| registering.set(false),
                        on_cancel: move |_| registering.set(false),
                    }
                } else {
                    LoginForm {
                        session: session.clone(),
                        api: api.clone(),
                        on_register: move |_| registering.set(true),
                    }
                }
            }
        }
    }
}

/// Phone + password form. A successful login starts the session; the screen
/// switch happens through the session subscription.
#[component]
fn LoginForm(session: SessionHandle, api: ApiClient, on_register: EventHandler<()>) -> Element {
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut alert = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let api = api.clone();
        spawn(async move {
            let phone = phone();
            match api.login(&phone, &password()).await {
                Ok(resp) => session.login(resp.access_token, SessionUser { phone }),
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    alert.set(Some(LOGIN_FAILED.to_string()));
                }
            }
        });
    };

    rsx! {
        form {
            class: "form-stack",
            onsubmit: handle_login,

            label {
                class: "field",
                span { "Phone Number" }
                input {
                    r#type: "tel",
                    placeholder: "+91 98765 43210",
                    required: true,
                    value: "{phone}",
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
            }

            label {
                class: "field",
                span { "Password" }
                input {
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            button { class: "btn btn-primary btn-block", r#type: "submit", "Login" }
            button {
                class: "btn btn-link btn-block",
                r#type: "button",
                onclick: move |_| on_register.call(()),
                "New user? Register here"
            }
        }

        if let Some(message) = alert() {
            AlertDialog { message, on_close: move |_| alert.set(None) }
        }
    }
}

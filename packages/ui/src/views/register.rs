//! Registration form with name, phone, address and password.

use api::{ApiClient, RegistrationRecord};
use dioxus::prelude::*;

use crate::alert::{AlertDialog, REGISTRATION_FAILED, REGISTRATION_SUCCEEDED};

/// Registration form. Nothing entered here is kept once it has been sent.
///
/// After a successful registration the user is told to log in and
/// `on_registered` fires when the alert is dismissed.
#[component]
pub fn RegisterForm(
    api: ApiClient,
    on_registered: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut record = use_signal(RegistrationRecord::default);
    let mut alert = use_signal(|| Option::<(String, bool)>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let data = record();
            match api.register(&data).await {
                Ok(receipt) => {
                    tracing::info!(user_id = ?receipt.user_id, "Registered new patient");
                    alert.set(Some((REGISTRATION_SUCCEEDED.to_string(), true)));
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    alert.set(Some((REGISTRATION_FAILED.to_string(), false)));
                }
            }
        });
    };

    let close_alert = move |_: ()| {
        if let Some((_, registered)) = alert() {
            alert.set(None);
            if registered {
                on_registered.call(());
            }
        }
    };

    rsx! {
        form {
            class: "form-stack",
            onsubmit: handle_register,

            label {
                class: "field",
                span { "Full Name" }
                input {
                    r#type: "text",
                    required: true,
                    value: "{record.read().name}",
                    oninput: move |evt: FormEvent| record.write().name = evt.value(),
                }
            }

            label {
                class: "field",
                span { "Phone Number" }
                input {
                    r#type: "tel",
                    required: true,
                    value: "{record.read().phone}",
                    oninput: move |evt: FormEvent| record.write().phone = evt.value(),
                }
            }

            label {
                class: "field",
                span { "Address (Delhi NCR)" }
                textarea {
                    rows: "2",
                    required: true,
                    value: "{record.read().address}",
                    oninput: move |evt: FormEvent| record.write().address = evt.value(),
                }
            }

            label {
                class: "field",
                span { "Password" }
                input {
                    r#type: "password",
                    required: true,
                    value: "{record.read().password}",
                    oninput: move |evt: FormEvent| record.write().password = evt.value(),
                }
            }

            button { class: "btn btn-primary btn-block", r#type: "submit", "Register" }
            button {
                class: "btn btn-link btn-block",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Back to Login"
            }
        }

        if let Some((message, _)) = alert() {
            AlertDialog { message, on_close: close_alert }
        }
    }
}

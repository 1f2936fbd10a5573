//! Blocking alert used for every request outcome the user must acknowledge.

use dioxus::prelude::*;

use crate::views::ModalOverlay;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Please login.";
pub const BOOKING_FAILED: &str = "Booking failed. Please try again.";
pub const BOOKING_CONFIRMED: &str = "Booking confirmed! Our team will contact you shortly.";

/// Modal with a message and a single OK button.
#[component]
pub fn AlertDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "alert-dialog",
                role: "alertdialog",
                p { class: "alert-message", "{message}" }
                button {
                    class: "btn btn-primary",
                    autofocus: true,
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}

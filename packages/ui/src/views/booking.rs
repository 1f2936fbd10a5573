use api::ApiClient;
use dioxus::prelude::*;
use store::SessionHandle;

use crate::alert::AlertDialog;
use crate::booking_form::{
    min_booking_date, send_booking, BookingForm, ServiceKind, ServiceOption, SERVICES,
};
use crate::icons::{FaCircleInfo, FaHeartPulse, FaPersonWalking, FaUserDoctor, FaUserNurse};
use crate::Icon;

/// "Book a Service" screen.
#[component]
pub fn BookingView(session: SessionHandle, api: ApiClient, patient_id: i64) -> Element {
    let mut form = use_signal(BookingForm::default);
    let mut alert = use_signal(|| Option::<String>::None);
    let min_date = use_hook(min_booking_date);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit(patient_id) else {
            return;
        };
        let session = session.clone();
        let api = api.clone();
        spawn(async move {
            let outcome = send_booking(&api, &session, &request).await;
            form.write().finish(outcome);
            if let Some(message) = outcome.alert() {
                alert.set(Some(message.to_string()));
            }
        });
    };

    let current = form();

    rsx! {
        div {
            class: "booking-page",

            section {
                class: "card",
                h2 { "Book a Service" }

                form {
                    class: "form-stack",
                    onsubmit: handle_submit,

                    div {
                        span { class: "field-label", "Select Service" }
                        div {
                            class: "service-grid",
                            for service in SERVICES {
                                div {
                                    key: "{service.id}",
                                    class: if current.service == service.name {
                                        "service-option selected"
                                    } else {
                                        "service-option"
                                    },
                                    onclick: move |_| form.write().select_service(service.name),
                                    ServiceIcon { service }
                                    div {
                                        p { class: "service-name", "{service.name}" }
                                        p { class: "muted", "{service.description}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "field-row",
                        label {
                            class: "field",
                            span { "Date" }
                            input {
                                r#type: "date",
                                required: true,
                                min: min_date.clone(),
                                value: "{current.date}",
                                oninput: move |evt: FormEvent| form.write().set_date(evt.value()),
                            }
                        }
                        label {
                            class: "field",
                            span { "Time" }
                            input {
                                r#type: "time",
                                required: true,
                                value: "{current.time}",
                                oninput: move |evt: FormEvent| form.write().set_time(evt.value()),
                            }
                        }
                    }

                    label {
                        class: "field",
                        span { "Additional Notes" }
                        textarea {
                            rows: "4",
                            placeholder: "Any specific requirements or medical history...",
                            value: "{current.notes}",
                            oninput: move |evt: FormEvent| form.write().set_notes(evt.value()),
                        }
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: !current.can_submit(),
                        "Confirm Booking"
                    }
                }
            }

            aside {
                class: "coverage-note",
                Icon { icon: FaCircleInfo, width: 24, height: 24 }
                div {
                    h3 { "Service Coverage" }
                    p {
                        "Available across Delhi NCR including Delhi, Noida, Gurgaon, "
                        "Ghaziabad, and Faridabad. "
                        "Emergency services available 24/7."
                    }
                }
            }
        }

        if let Some(message) = alert() {
            AlertDialog { message, on_close: move |_| alert.set(None) }
        }
    }
}

#[component]
fn ServiceIcon(service: ServiceOption) -> Element {
    match service.kind {
        ServiceKind::Icu => rsx! { Icon { icon: FaHeartPulse, width: 32, height: 32 } },
        ServiceKind::Physiotherapy => {
            rsx! { Icon { icon: FaPersonWalking, width: 32, height: 32 } }
        }
        ServiceKind::Nursing => rsx! { Icon { icon: FaUserNurse, width: 32, height: 32 } },
        ServiceKind::Doctor => rsx! { Icon { icon: FaUserDoctor, width: 32, height: 32 } },
    }
}

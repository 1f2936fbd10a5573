//! # Booking form state
//!
//! [`BookingForm`] holds what the patient has entered on the "Book a Service"
//! screen and decides when it may be submitted. The component keeps one in a
//! signal and renders from [`BookingForm::phase`].
//!
//! ```text
//! NoService ──select──▶ Incomplete ──date+time──▶ Ready ──submit──▶ Submitting
//!                                                                  │
//!                                     Submitted (fields reset) ◀──┤
//!                                     Failed (fields kept)     ◀──┘
//! ```
//!
//! Submit stays enabled while a request is in flight, so repeated clicks can
//! send overlapping bookings. Each one is tracked and the last to finish
//! decides the outcome shown.
//!
//! [`send_booking`] performs the request and reports a [`SubmitOutcome`],
//! which [`BookingForm::finish`] applies.
//!
//! The datetime sent is `"{date}T{time}:00"`: the raw values of the browser's
//! date and time controls, no offset. The service area is a single timezone.

use api::{ApiClient, NewBooking};
use store::SessionHandle;

use crate::alert::{BOOKING_CONFIRMED, BOOKING_FAILED};

/// Kind of care, used to pick the service's icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    Icu,
    Physiotherapy,
    Nursing,
    Doctor,
}

/// One bookable home-healthcare service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub kind: ServiceKind,
    /// Sent to the backend as the booking's `service`.
    pub name: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceOption; 4] = [
    ServiceOption {
        id: "icu-home",
        kind: ServiceKind::Icu,
        name: "ICU at Home",
        description: "Critical care at your home",
    },
    ServiceOption {
        id: "physiotherapy",
        kind: ServiceKind::Physiotherapy,
        name: "Physiotherapy",
        description: "Expert physical therapy",
    },
    ServiceOption {
        id: "nursing",
        kind: ServiceKind::Nursing,
        name: "Nursing Care",
        description: "24/7 professional nursing",
    },
    ServiceOption {
        id: "doctor-visit",
        kind: ServiceKind::Doctor,
        name: "Doctor Visit",
        description: "Home consultation",
    },
];

/// Where the form stands, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingPhase {
    NoService,
    Incomplete,
    Ready,
    Submitting,
    Submitted,
    Failed,
}

/// How a booking request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    Failed,
    /// The token was rejected and the session has been ended.
    SessionExpired,
}

impl SubmitOutcome {
    /// Alert to show. An expired session returns to the login screen instead.
    pub fn alert(self) -> Option<&'static str> {
        match self {
            Self::Confirmed => Some(BOOKING_CONFIRMED),
            Self::Failed => Some(BOOKING_FAILED),
            Self::SessionExpired => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Outcome {
    #[default]
    None,
    Submitted,
    Failed,
}

/// Field values and submission bookkeeping of the booking form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    in_flight: u32,
    outcome: Outcome,
}

impl BookingForm {
    pub fn select_service(&mut self, name: impl Into<String>) {
        self.service = name.into();
        self.edited();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
        self.edited();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
        self.edited();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.edited();
    }

    fn edited(&mut self) {
        self.outcome = Outcome::None;
    }

    /// Submit is enabled iff service, date and time are all filled in.
    pub fn can_submit(&self) -> bool {
        !self.service.is_empty() && !self.date.is_empty() && !self.time.is_empty()
    }

    /// Combined timestamp sent to the backend, once date and time are set.
    pub fn datetime(&self) -> Option<String> {
        if self.date.is_empty() || self.time.is_empty() {
            return None;
        }
        Some(format!("{}T{}:00", self.date, self.time))
    }

    /// Request body for the current fields.
    pub fn request(&self, patient_id: i64) -> Option<NewBooking> {
        if !self.can_submit() {
            return None;
        }
        Some(NewBooking {
            patient_id,
            service: self.service.clone(),
            datetime: self.datetime()?,
            notes: self.notes.clone(),
        })
    }

    /// Start a submission. Returns the body to send, or `None` if the form is
    /// not ready. Allowed while earlier submissions are still in flight.
    pub fn begin_submit(&mut self, patient_id: i64) -> Option<NewBooking> {
        let request = self.request(patient_id)?;
        self.in_flight += 1;
        Some(request)
    }

    /// A submission succeeded: clear every field.
    pub fn succeed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.service.clear();
        self.date.clear();
        self.time.clear();
        self.notes.clear();
        self.outcome = Outcome::Submitted;
    }

    /// A submission failed: keep the fields for another try.
    pub fn fail(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.outcome = Outcome::Failed;
    }

    /// Apply the result of one submission.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Confirmed => self.succeed(),
            SubmitOutcome::Failed | SubmitOutcome::SessionExpired => self.fail(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn phase(&self) -> BookingPhase {
        if self.is_submitting() {
            return BookingPhase::Submitting;
        }
        match self.outcome {
            Outcome::Submitted => return BookingPhase::Submitted,
            Outcome::Failed => return BookingPhase::Failed,
            Outcome::None => {}
        }
        if self.service.is_empty() {
            BookingPhase::NoService
        } else if self.can_submit() {
            BookingPhase::Ready
        } else {
            BookingPhase::Incomplete
        }
    }
}

/// Send `request` with the session's token. A rejected token ends the
/// session.
pub async fn send_booking(
    api: &ApiClient,
    session: &SessionHandle,
    request: &NewBooking,
) -> SubmitOutcome {
    let token = session.token();
    match api.create_booking(token.as_deref(), request).await {
        Ok(receipt) => {
            tracing::info!(booking_id = ?receipt.booking_id, "Booking confirmed");
            SubmitOutcome::Confirmed
        }
        Err(e) if e.is_unauthorized() => {
            tracing::warn!("Session token rejected, logging out");
            session.logout();
            SubmitOutcome::SessionExpired
        }
        Err(e) => {
            tracing::warn!("Booking failed: {}", e);
            SubmitOutcome::Failed
        }
    }
}

/// Earliest date the date picker offers: today, in the browser's local time.
#[cfg(target_arch = "wasm32")]
pub fn min_booking_date() -> Option<String> {
    let date = js_sys::Date::new_0();
    Some(format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn min_booking_date() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryStore, SessionStore, TokenStore};

    use super::*;
    use crate::test_server;

    fn filled() -> BookingForm {
        let mut form = BookingForm::default();
        form.select_service("Physiotherapy");
        form.set_date("2026-01-10");
        form.set_time("14:30");
        form
    }

    #[test]
    fn test_submit_enabled_only_when_required_fields_set() {
        let mut form = BookingForm::default();
        assert!(!form.can_submit());
        assert_eq!(form.phase(), BookingPhase::NoService);

        form.select_service("Nursing Care");
        assert!(!form.can_submit());
        assert_eq!(form.phase(), BookingPhase::Incomplete);

        form.set_date("2026-01-10");
        assert!(!form.can_submit());

        form.set_time("09:15");
        assert!(form.can_submit());
        assert_eq!(form.phase(), BookingPhase::Ready);

        // Notes are optional either way
        form.set_notes("first floor");
        assert!(form.can_submit());

        form.set_date("");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_date_and_time_without_service() {
        let mut form = BookingForm::default();
        form.set_date("2026-01-10");
        form.set_time("14:30");
        assert!(!form.can_submit());
        assert_eq!(form.phase(), BookingPhase::NoService);
        assert!(form.begin_submit(1).is_none());
    }

    #[test]
    fn test_request_body() {
        let form = filled();
        let request = form.request(1).unwrap();
        assert_eq!(
            request,
            NewBooking {
                patient_id: 1,
                service: "Physiotherapy".to_string(),
                datetime: "2026-01-10T14:30:00".to_string(),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_datetime_needs_both_parts() {
        let mut form = BookingForm::default();
        form.set_date("2026-03-01");
        assert!(form.datetime().is_none());
        form.set_time("07:05");
        assert_eq!(form.datetime().as_deref(), Some("2026-03-01T07:05:00"));
    }

    #[test]
    fn test_success_resets_fields() {
        let mut form = filled();
        form.set_notes("bring wheelchair");

        assert!(form.begin_submit(1).is_some());
        assert_eq!(form.phase(), BookingPhase::Submitting);
        // Still enabled while in flight
        assert!(form.can_submit());

        form.succeed();
        assert_eq!(form.phase(), BookingPhase::Submitted);
        assert!(form.service.is_empty());
        assert!(form.date.is_empty());
        assert!(form.time.is_empty());
        assert!(form.notes.is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.set_notes("bring wheelchair");
        let before = (
            form.service.clone(),
            form.date.clone(),
            form.time.clone(),
            form.notes.clone(),
        );

        form.begin_submit(1).unwrap();
        form.fail();

        assert_eq!(form.phase(), BookingPhase::Failed);
        assert_eq!(
            (form.service.clone(), form.date.clone(), form.time.clone(), form.notes.clone()),
            before
        );
        assert!(form.can_submit());

        // Editing again clears the failure marker
        form.set_time("15:00");
        assert_eq!(form.phase(), BookingPhase::Ready);
    }

    #[test]
    fn test_overlapping_submissions() {
        let mut form = filled();
        assert!(form.begin_submit(1).is_some());
        assert!(form.begin_submit(1).is_some());

        form.fail();
        assert_eq!(form.phase(), BookingPhase::Submitting);

        form.succeed();
        assert!(!form.is_submitting());
        assert_eq!(form.phase(), BookingPhase::Submitted);
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.name, b.name);
            }
        }
        assert!(SERVICES.iter().any(|s| s.name == "Physiotherapy"));
    }

    fn session_with(token: &str) -> (SessionHandle, MemoryStore) {
        let tokens = MemoryStore::with_token(token);
        (SessionHandle::new(SessionStore::new(tokens.clone())), tokens)
    }

    #[tokio::test]
    async fn test_confirmed_booking_resets_form() {
        let (api, recorded) = test_server::serve().await;
        let (session, _) = session_with(test_server::TOKEN);
        let mut form = filled();
        form.set_notes("ground floor");

        let request = form.begin_submit(1).unwrap();
        let outcome = send_booking(&api, &session, &request).await;
        form.finish(outcome);

        assert_eq!(outcome, SubmitOutcome::Confirmed);
        assert_eq!(outcome.alert(), Some(BOOKING_CONFIRMED));
        assert_eq!(recorded.last_authorization().as_deref(), Some("Bearer abc"));
        assert_eq!(
            recorded.last_body(),
            json!({
                "patient_id": 1,
                "service": "Physiotherapy",
                "datetime": "2026-01-10T14:30:00",
                "notes": "ground floor"
            })
        );
        assert_eq!(form.phase(), BookingPhase::Submitted);
        assert!(form.service.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_token_ends_session() {
        let (api, _) = test_server::serve().await;
        let (session, tokens) = session_with(test_server::STALE_TOKEN);
        let mut form = filled();

        let request = form.begin_submit(1).unwrap();
        let outcome = send_booking(&api, &session, &request).await;
        form.finish(outcome);

        assert_eq!(outcome, SubmitOutcome::SessionExpired);
        assert_eq!(outcome.alert(), None);
        assert!(session.token().is_none());
        assert!(tokens.load().is_none());
        assert_eq!(form.phase(), BookingPhase::Failed);
        assert_eq!(form.service, "Physiotherapy");
    }

    #[tokio::test]
    async fn test_server_error_keeps_fields_and_session() {
        let (api, _) = test_server::serve().await;
        let (session, _) = session_with(test_server::BROKEN_TOKEN);
        let mut form = filled();

        let request = form.begin_submit(1).unwrap();
        let outcome = send_booking(&api, &session, &request).await;
        form.finish(outcome);

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(outcome.alert(), Some(BOOKING_FAILED));
        assert_eq!(session.token().as_deref(), Some(test_server::BROKEN_TOKEN));
        assert_eq!(form.phase(), BookingPhase::Failed);
        assert!(form.can_submit());
    }

    #[test]
    fn test_every_service_has_its_own_kind() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.kind, b.kind);
            }
        }
    }
}

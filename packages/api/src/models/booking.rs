//! # Booking models
//!
//! | Struct | Direction | Shape |
//! |--------|-----------|-------|
//! | [`Booking`] | `GET /bookings` item | `{ id, service, datetime, notes?, patient_id?, clinician_id? }` |
//! | [`NewBooking`] | `POST /bookings` body | `{ patient_id, service, datetime, notes }` |
//! | [`BookingReceipt`] | `POST /bookings` answer | `{ msg, booking_id }` |
//! | [`HealthStatus`] | `GET /health` answer | `{ status }` |
//!
//! `datetime` is a bare local timestamp (`"2026-01-10T14:30:00"`) with no
//! offset. The service runs in a single timezone, so client and server agree
//! on its meaning implicitly.

use serde::{Deserialize, Serialize};

/// A scheduled visit as listed by the backend. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub service: String,
    pub datetime: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub clinician_id: Option<i64>,
}

/// Booking request built by the booking form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub patient_id: i64,
    pub service: String,
    pub datetime: String,
    pub notes: String,
}

/// Body returned by a successful booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
}

/// Backend liveness answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

//! # API crate — typed client for the MAX@Home booking backend
//!
//! Every screen of the patient app talks to the backend through [`ApiClient`].
//! The backend is an external JSON-over-HTTP service; this crate only knows
//! its wire format.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one async method per endpoint, bearer token handling, status inspection |
//! | [`error`] | [`ApiError`]: transport, decode, unauthorized and other status failures |
//! | [`models`] | Request and response bodies (`RegistrationRecord`, `LoginResponse`, `Booking`, ...) |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Client method |
//! |--------|------|------|---------------|
//! | POST | `/register` | none | [`ApiClient::register`] |
//! | POST | `/login` | none | [`ApiClient::login`] |
//! | GET | `/bookings` | Bearer | [`ApiClient::list_bookings`] |
//! | POST | `/bookings` | Bearer | [`ApiClient::create_booking`] |
//! | GET | `/health` | none | [`ApiClient::health`] |

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Booking, BookingReceipt, HealthStatus, LoginRequest, LoginResponse, LoginUser, NewBooking,
    RegistrationReceipt, RegistrationRecord,
};

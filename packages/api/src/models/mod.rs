//! Wire models for the booking backend.

mod booking;
mod user;

pub use booking::{Booking, BookingReceipt, HealthStatus, NewBooking};
pub use user::{LoginRequest, LoginResponse, LoginUser, RegistrationReceipt, RegistrationRecord};

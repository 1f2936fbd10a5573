//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAXHOME_CSS: Asset = asset!("/assets/styling/maxhome.css");

mod auth;
pub use auth::{use_session, LogoutButton};

mod alert;
pub use alert::AlertDialog;

pub mod booking_form;
pub use booking_form::{
    send_booking, BookingForm, BookingPhase, ServiceKind, ServiceOption, SubmitOutcome, SERVICES,
};

pub mod dashboard;
pub use dashboard::{dashboard_stats, load_bookings, DashboardStat};

mod navbar;
pub use navbar::{Navbar, NavState, Page};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

#[cfg(test)]
mod test_server;

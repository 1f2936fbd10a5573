//! Figures and rows shown on the dashboard.

use api::{ApiClient, ApiError, Booking};
use store::SessionHandle;

pub const EMPTY_BOOKINGS_MESSAGE: &str = "No bookings yet. Book your first service!";

/// Accent of a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Blue,
    Green,
    Purple,
    Orange,
}

impl StatTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "stat-icon tone-blue",
            Self::Green => "stat-icon tone-green",
            Self::Purple => "stat-icon tone-purple",
            Self::Orange => "stat-icon tone-orange",
        }
    }
}

/// One stat card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStat {
    pub label: &'static str,
    pub value: String,
    pub tone: StatTone,
}

/// Stat cards for a patient with `active_bookings` bookings. Only the first
/// depends on the patient; the rest describe the service.
pub fn dashboard_stats(active_bookings: usize) -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            label: "Active Bookings",
            value: active_bookings.to_string(),
            tone: StatTone::Blue,
        },
        DashboardStat {
            label: "Total Services",
            value: "12".to_string(),
            tone: StatTone::Green,
        },
        DashboardStat {
            label: "Care Team",
            value: "8".to_string(),
            tone: StatTone::Purple,
        },
        DashboardStat {
            label: "Cities Covered",
            value: "5".to_string(),
            tone: StatTone::Orange,
        },
    ]
}

/// Display row for one booking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRow {
    pub key: i64,
    pub service: String,
    pub reference: String,
}

/// One row per booking, in the order the server sent them.
pub fn booking_rows(bookings: &[Booking]) -> Vec<BookingRow> {
    bookings
        .iter()
        .map(|b| BookingRow {
            key: b.id,
            service: b.service.clone(),
            reference: format!("Booking ID: #{}", b.id),
        })
        .collect()
}

/// Fetch the patient's bookings with the session's token.
///
/// A rejected token ends the session. Any other failure is logged and shows
/// as an empty list.
pub async fn load_bookings(api: &ApiClient, session: &SessionHandle) -> Vec<Booking> {
    let Some(token) = session.token() else {
        return Vec::new();
    };
    match api.list_bookings(Some(&token)).await {
        Ok(bookings) => bookings,
        Err(ApiError::Unauthorized) => {
            tracing::warn!("Session token rejected, logging out");
            session.logout();
            Vec::new()
        }
        Err(e) => {
            tracing::error!("Failed to load bookings: {}", e);
            Vec::new()
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Booking wire types
// ---------------------------------------------------------------------------

/// Booking lifecycle as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Whether the booking can still be cancelled by its owner.
    pub fn is_open(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub created_by_user_id: String,
    #[serde(default)]
    pub subject: Option<String>,
    /// ISO-8601 start/end of the booked slot.
    pub start: String,
    pub end: String,
    pub status: BookingStatus,
    pub created_at: String,
}

/// Payload for `POST /bookings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub room_id: String,
    /// Booking day (`yyyy-mm-dd`); the backend infers the full-day range.
    pub date: String,
    pub subject: String,
}

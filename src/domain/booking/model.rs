//! Booking intake and availability types
//!
//! Nothing here is persisted. A booking submission is validated for shape,
//! acknowledged, and dropped; availability is a fixed stub until real
//! calendar lookups exist.

use serde::{Deserialize, Serialize};

/// Pet species accepted on a booking submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }
}

/// A validated booking submission. Lives only for the duration of the
/// request.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub service_id: String,
    /// Requested day, "YYYY-MM-DD".
    pub date: String,
    /// Selected slot start, e.g. "2026-01-03T09:00:00.000Z".
    pub start_iso: String,
    pub pet_name: String,
    pub species: Option<Species>,
    pub owner_name: String,
    /// Contact number for SMS/WhatsApp follow-up.
    pub phone: String,
}

/// A fixed-width time interval offered for booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot start as an ISO-8601 UTC instant, e.g. "2026-01-03T09:00:00.000Z".
    pub start_iso: String,
    /// Human-readable 12-hour label, e.g. "9:00 AM".
    pub label: String,
}

/// Minutes past midnight of the first offered slot (09:00).
const FIRST_SLOT_MINUTES: u32 = 9 * 60;
/// Number of half-hour slots offered per day.
const SLOT_COUNT: u32 = 4;

/// Stubbed availability: four half-hour slots starting 09:00 UTC on the
/// given date, independent of service and date. Not a model for real slot
/// computation.
pub fn stub_slots(date: &str) -> Vec<TimeSlot> {
    (0..SLOT_COUNT)
        .map(|i| {
            let minutes = FIRST_SLOT_MINUTES + 30 * i;
            let (hour, minute) = (minutes / 60, minutes % 60);
            TimeSlot {
                start_iso: format!("{date}T{hour:02}:{minute:02}:00.000Z"),
                label: slot_label(hour, minute),
            }
        })
        .collect()
}

fn slot_label(hour: u32, minute: u32) -> String {
    let (hour12, meridiem) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{hour12}:{minute:02} {meridiem}")
}

// ── Tests ──────────────────────────────────────────────────────

//! Booking intake and availability
//!
//! Transient request/response shapes for the booking flow; no entity here
//! is ever stored.

pub mod model;

pub use model::{stub_slots, AppointmentRequest, Species, TimeSlot};

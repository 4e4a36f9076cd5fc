//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::TimeSlot;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Service the client wants to book
    pub service_id: Option<String>,
    /// Requested day, "YYYY-MM-DD"
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotDto {
    #[serde(rename = "startISO")]
    pub start_iso: String,
    pub label: String,
}

impl From<TimeSlot> for SlotDto {
    fn from(slot: TimeSlot) -> Self {
        Self {
            start_iso: slot.start_iso,
            label: slot.label,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SlotsResponse {
    pub slots: Vec<SlotDto>,
}

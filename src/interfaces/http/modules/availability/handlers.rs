//! Availability handler (stub)

use axum::{extract::Query, Json};
use tracing::debug;

use super::dto::{AvailabilityQuery, SlotDto, SlotsResponse};
use crate::domain::{stub_slots, DomainError};
use crate::interfaces::http::common::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/availability",
    tag = "Availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Bookable slots for the requested day", body = SlotsResponse),
        (status = 400, description = "Missing query parameters", body = ErrorBody)
    )
)]
pub async fn list_availability(
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<SlotsResponse>, ApiError> {
    let service_id = query.service_id.filter(|s| !s.is_empty());
    let date = query.date.filter(|s| !s.is_empty());

    let (Some(service_id), Some(date)) = (service_id, date) else {
        return Err(DomainError::Validation("Missing serviceId or date".into()).into());
    };

    debug!(%service_id, %date, "availability lookup (stubbed)");

    let slots: Vec<SlotDto> = stub_slots(&date).into_iter().map(Into::into).collect();
    Ok(Json(SlotsResponse { slots }))
}

//! Booking intake handler

use axum::Json;
use tracing::info;

use super::dto::CreateAppointmentRequest;
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorBody, OkResponse};

#[utoipa::path(
    post,
    path = "/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 200, description = "Booking acknowledged", body = OkResponse),
        (status = 400, description = "Missing required fields", body = ErrorBody)
    )
)]
pub async fn create_appointment(
    ApiJson(req): ApiJson<CreateAppointmentRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    let request = req.into_request()?;

    info!(
        service_id = %request.service_id,
        date = %request.date,
        start = %request.start_iso,
        pet = %request.pet_name,
        species = request.species.map_or("unspecified", |s| s.as_str()),
        "booking request received"
    );

    // TODO: create the calendar event (Google/Microsoft) here once the
    // integration lands; until then the request is acknowledged and dropped.
    Ok(Json(OkResponse { ok: true }))
}

//! Public service catalog handlers

use axum::{extract::State, Json};

use super::dto::{PublicServiceDto, PublicServicesResponse};
use crate::interfaces::http::common::{ApiError, ErrorBody};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/services",
    tag = "Catalog",
    responses(
        (status = 200, description = "Active services ordered by name", body = PublicServicesResponse),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<PublicServicesResponse>, ApiError> {
    let services = state.services.list_active().await?;
    let services: Vec<PublicServiceDto> = services.into_iter().map(Into::into).collect();
    Ok(Json(PublicServicesResponse { services }))
}

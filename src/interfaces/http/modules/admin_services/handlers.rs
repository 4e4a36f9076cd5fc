//! Admin service catalog handlers
//!
//! All routes here sit behind the admin gate middleware; handlers never see
//! an unauthenticated request.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    AdminServiceDto, AdminServicesResponse, CreateServiceRequest, ServiceEnvelope,
    UpdateServiceRequest,
};
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorBody, OkResponse};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/admin/services",
    tag = "Admin",
    security(("admin_key" = [])),
    responses(
        (status = 200, description = "All services ordered by name", body = AdminServicesResponse),
        (status = 401, description = "Missing or invalid admin key", body = ErrorBody),
        (status = 500, description = "Server misconfigured or storage failure", body = ErrorBody)
    )
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<AdminServicesResponse>, ApiError> {
    let services = state.services.list_all().await?;
    let services: Vec<AdminServiceDto> = services.into_iter().map(Into::into).collect();
    Ok(Json(AdminServicesResponse { services }))
}

#[utoipa::path(
    post,
    path = "/admin/services",
    tag = "Admin",
    security(("admin_key" = [])),
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Created", body = ServiceEnvelope),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin key", body = ErrorBody),
        (status = 500, description = "Server misconfigured or storage failure", body = ErrorBody)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateServiceRequest>,
) -> Result<Json<ServiceEnvelope>, ApiError> {
    let new = req.into_new_service()?;
    let service = state.services.create(new).await?;
    Ok(Json(ServiceEnvelope {
        service: service.into(),
    }))
}

#[utoipa::path(
    patch,
    path = "/admin/services/{id}",
    tag = "Admin",
    security(("admin_key" = [])),
    params(("id" = String, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Updated", body = ServiceEnvelope),
        (status = 400, description = "Invalid field values", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin key", body = ErrorBody),
        (status = 500, description = "Server misconfigured or storage failure", body = ErrorBody)
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateServiceRequest>,
) -> Result<Json<ServiceEnvelope>, ApiError> {
    let patch = req.into_patch()?;
    let service = state.services.update(&id, patch).await?;
    Ok(Json(ServiceEnvelope {
        service: service.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/admin/services/{id}",
    tag = "Admin",
    security(("admin_key" = [])),
    params(("id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted", body = OkResponse),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin key", body = ErrorBody),
        (status = 500, description = "Server misconfigured or storage failure", body = ErrorBody)
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OkResponse>, ApiError> {
    state.services.delete(&id).await?;
    Ok(Json(OkResponse { ok: true }))
}

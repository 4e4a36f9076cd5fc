//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::ServiceRepository;
use crate::interfaces::http::common::{ErrorBody, OkResponse};
use crate::interfaces::http::middleware::{
    admin_gate_middleware, AdminGateState, ADMIN_KEY_HEADER,
};
use crate::interfaces::http::modules::{
    admin_services, appointments, availability, catalog, health, AppState,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Public catalog
        catalog::list_services,
        // Admin catalog
        admin_services::list_services,
        admin_services::create_service,
        admin_services::update_service,
        admin_services::delete_service,
        // Booking
        appointments::create_appointment,
        availability::list_availability,
    ),
    components(
        schemas(
            // Common
            ErrorBody,
            OkResponse,
            // Catalog
            catalog::PublicServiceDto,
            catalog::PublicServicesResponse,
            // Admin
            admin_services::AdminServiceDto,
            admin_services::AdminServicesResponse,
            admin_services::ServiceEnvelope,
            admin_services::CreateServiceRequest,
            admin_services::UpdateServiceRequest,
            // Booking
            appointments::CreateAppointmentRequest,
            availability::SlotDto,
            availability::SlotsResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Catalog", description = "Public listing of bookable services"),
        (name = "Admin", description = "Service catalog management behind the shared admin key"),
        (name = "Appointments", description = "Booking intake"),
        (name = "Availability", description = "Bookable time slots"),
        (name = "Health", description = "Server health check endpoints"),
    ),
    info(
        title = "Pet Appointments API",
        version = "1.0.0",
        description = "REST API for the pet-care booking service",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    services: Arc<dyn ServiceRepository>,
    db: DatabaseConnection,
    admin_key: Option<String>,
) -> Router {
    let state = AppState { services };
    let gate = AdminGateState::new(admin_key);

    // Admin catalog routes: the gate short-circuits before any handler runs.
    let admin_routes = Router::new()
        .route(
            "/",
            get(admin_services::list_services).post(admin_services::create_service),
        )
        .route(
            "/{id}",
            patch(admin_services::update_service).delete(admin_services::delete_service),
        )
        .layer(middleware::from_fn_with_state(gate, admin_gate_middleware))
        .with_state(state.clone());

    // Public routes
    let public_routes = Router::new()
        .route("/services", get(catalog::list_services))
        .with_state(state);

    let booking_routes = Router::new()
        .route("/appointments", post(appointments::create_appointment))
        .route("/availability", get(availability::list_availability));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(public_routes)
        .merge(booking_routes)
        .merge(health_routes)
        .nest("/admin/services", admin_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

//! HTTP error shaping
//!
//! Every API operation converts domain failures into a `{"error": ...}`
//! JSON body with an explicit status code; nothing reaches the transport
//! layer unshaped.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::dto::ErrorBody;
use crate::domain::DomainError;

/// Wrapper turning a `DomainError` into an HTTP response. Handlers return
/// `Result<_, ApiError>` and propagate with `?`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not found".to_string()),
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            DomainError::Unauthorized(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            DomainError::Misconfigured(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server misconfigured ({msg})"),
            ),
            // Backend message passed through: this is an internal admin
            // tool, not a public surface.
            DomainError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            error!("request failed: {}", message);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            status_of(DomainError::NotFound {
                entity: "Service",
                field: "id",
                value: "x".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Unauthorized("no key".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(DomainError::Misconfigured("missing ADMIN_KEY".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(DomainError::Storage("Database error: boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

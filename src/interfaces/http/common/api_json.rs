//! JSON extractor with validation
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but shapes deserialization
//! failures as `{"error": ...}` bodies and additionally runs
//! `validator::Validate::validate()` on the deserialized value. Both
//! failure kinds answer 400, matching the service-wide error taxonomy.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::ApiError;
use crate::domain::DomainError;

/// An extractor that deserializes JSON and validates it.
pub struct ApiJson<T>(pub T);

/// Error type for `ApiJson` extraction failures.
pub enum ApiJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let err = match self {
            Self::JsonError(rejection) => {
                DomainError::Validation(format!("Invalid JSON: {}", rejection))
            }
            Self::ValidationError(errors) => DomainError::from(errors),
        };
        ApiError(err).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ApiJsonRejection::ValidationError)?;

        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

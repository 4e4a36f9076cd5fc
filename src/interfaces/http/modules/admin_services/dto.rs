//! Admin service catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{DomainError, DomainResult, NewService, Service, ServicePatch};

/// Service as shown in the admin listing, active flag included
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminServiceDto {
    pub id: String,
    pub name: String,
    pub duration_minutes: i32,
    pub is_active: bool,
}

impl From<Service> for AdminServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            duration_minutes: s.duration_minutes,
            is_active: s.is_active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminServicesResponse {
    pub services: Vec<AdminServiceDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceEnvelope {
    pub service: AdminServiceDto,
}

/// Create payload. Both fields are optional at the serde level so a missing
/// field produces the admin UI's expected 400 instead of a deserialization
/// failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub duration_minutes: Option<i32>,
}

impl CreateServiceRequest {
    pub fn into_new_service(self) -> DomainResult<NewService> {
        match (self.name, self.duration_minutes) {
            (Some(name), Some(duration_minutes)) => Ok(NewService {
                name,
                duration_minutes,
            }),
            _ => Err(DomainError::Validation(
                "Missing name or durationMinutes".into(),
            )),
        }
    }
}

/// Patch payload. Double options distinguish an absent field (leave
/// unchanged) from an explicit `null`, which is rejected: none of these
/// fields is clearable.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub duration_minutes: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<bool>)]
    pub is_active: Option<Option<bool>>,
}

/// A present field wraps its (possibly null) value in `Some`, so absent and
/// explicitly-null stay distinguishable after deserialization.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateServiceRequest {
    pub fn into_patch(self) -> DomainResult<ServicePatch> {
        Ok(ServicePatch {
            name: reject_null("name", self.name)?,
            duration_minutes: reject_null("durationMinutes", self.duration_minutes)?,
            is_active: reject_null("isActive", self.is_active)?,
        })
    }
}

fn reject_null<T>(field: &str, value: Option<Option<T>>) -> DomainResult<Option<T>> {
    match value {
        Some(Some(v)) => Ok(Some(v)),
        Some(None) => Err(DomainError::Validation(format!("{field} cannot be null"))),
        None => Ok(None),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_both_fields() {
        let req: CreateServiceRequest = serde_json::from_str(r#"{"name":"Bath"}"#).unwrap();
        let err = req.into_new_service().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Missing name or durationMinutes"));

        let req: CreateServiceRequest =
            serde_json::from_str(r#"{"name":"Bath","durationMinutes":30}"#).unwrap();
        let new = req.into_new_service().unwrap();
        assert_eq!(new.name, "Bath");
        assert_eq!(new.duration_minutes, 30);
    }

    #[test]
    fn absent_patch_fields_mean_no_change() {
        let req: UpdateServiceRequest = serde_json::from_str("{}").unwrap();
        let patch = req.into_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn supplied_patch_fields_carry_through() {
        let req: UpdateServiceRequest = serde_json::from_str(r#"{"isActive":false}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.is_active, Some(false));
        assert!(patch.name.is_none());
        assert!(patch.duration_minutes.is_none());
    }

    #[test]
    fn explicit_null_is_rejected() {
        let req: UpdateServiceRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
        let err = req.into_patch().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "name cannot be null"));
    }
}

//! Booking intake DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AppointmentRequest, DomainError, DomainResult, Species};

/// Booking submission from the public form. Everything except `species` is
/// required; empty strings count as missing, matching the form's own
/// behavior.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub service_id: Option<String>,
    /// Requested day, "YYYY-MM-DD"
    pub date: Option<String>,
    /// Selected slot start from the availability listing
    #[serde(rename = "startISO")]
    pub start_iso: Option<String>,
    pub pet_name: Option<String>,
    #[schema(value_type = Option<String>, example = "dog")]
    pub species: Option<Species>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn into_request(self) -> DomainResult<AppointmentRequest> {
        let (
            Some(service_id),
            Some(date),
            Some(start_iso),
            Some(pet_name),
            Some(owner_name),
            Some(phone),
        ) = (
            non_empty(self.service_id),
            non_empty(self.date),
            non_empty(self.start_iso),
            non_empty(self.pet_name),
            non_empty(self.owner_name),
            non_empty(self.phone),
        )
        else {
            return Err(DomainError::Validation("Missing required fields".into()));
        };

        Ok(AppointmentRequest {
            service_id,
            date,
            start_iso,
            pet_name,
            species: self.species,
            owner_name,
            phone,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> serde_json::Value {
        serde_json::json!({
            "serviceId": "svc-1",
            "date": "2026-01-03",
            "startISO": "2026-01-03T09:00:00.000Z",
            "petName": "Rex",
            "species": "dog",
            "ownerName": "Sam",
            "phone": "+15550100"
        })
    }

    #[test]
    fn full_payload_converts() {
        let req: CreateAppointmentRequest = serde_json::from_value(full_payload()).unwrap();
        let appointment = req.into_request().unwrap();
        assert_eq!(appointment.pet_name, "Rex");
        assert_eq!(appointment.species, Some(Species::Dog));
    }

    #[test]
    fn missing_phone_is_rejected() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("phone");
        let req: CreateAppointmentRequest = serde_json::from_value(payload).unwrap();
        let err = req.into_request().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "Missing required fields"));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut payload = full_payload();
        payload["ownerName"] = serde_json::json!("");
        let req: CreateAppointmentRequest = serde_json::from_value(payload).unwrap();
        assert!(req.into_request().is_err());
    }

    #[test]
    fn species_is_optional() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("species");
        let req: CreateAppointmentRequest = serde_json::from_value(payload).unwrap();
        let appointment = req.into_request().unwrap();
        assert!(appointment.species.is_none());
    }
}

//! Public catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Service;

/// Service as shown in the public listing. The active flag is omitted:
/// everything returned here is active by definition.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicServiceDto {
    pub id: String,
    pub name: String,
    pub duration_minutes: i32,
}

impl From<Service> for PublicServiceDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            duration_minutes: s.duration_minutes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicServicesResponse {
    pub services: Vec<PublicServiceDto>,
}

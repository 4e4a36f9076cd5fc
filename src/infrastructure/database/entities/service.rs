//! Service catalog entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One bookable service offered to clients
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_services")]
pub struct Model {
    /// Opaque service ID (UUID v4), generated on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Display name shown to clients (e.g., "Grooming", "Nail Trim")
    pub name: String,

    /// Fixed appointment length in minutes
    pub duration_minutes: i32,

    /// Inactive services stay editable in the admin panel but are hidden
    /// from the public listing
    pub is_active: bool,

    /// When the service was created
    pub created_at: DateTime<Utc>,

    /// When the service was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

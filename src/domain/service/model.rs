//! Service catalog domain entity

use chrono::{DateTime, Utc};
use validator::Validate;

/// A bookable offering with a name and fixed duration.
///
/// The identifier is opaque and immutable once created. The active flag only
/// controls visibility in the public listing; inactive services stay in the
/// admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a service. New services always start active.
#[derive(Debug, Clone, Validate)]
pub struct NewService {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub duration_minutes: i32,
}

/// Partial update for a service.
///
/// `None` means "leave the stored value unchanged". Supplied values are held
/// to the same invariants as creation.
#[derive(Debug, Clone, Default, Validate)]
pub struct ServicePatch {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub duration_minutes: Option<i32>,
    pub is_active: Option<bool>,
}

impl ServicePatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.duration_minutes.is_none() && self.is_active.is_none()
    }

    /// Apply the supplied fields to `service`, leaving the rest untouched.
    /// Timestamps are the repository's concern, not the patch's.
    pub fn apply(self, service: &mut Service) {
        if let Some(name) = self.name {
            service.name = name;
        }
        if let Some(duration_minutes) = self.duration_minutes {
            service.duration_minutes = duration_minutes;
        }
        if let Some(is_active) = self.is_active {
            service.is_active = is_active;
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Service repository interface

use async_trait::async_trait;

use super::model::{NewService, Service, ServicePatch};
use crate::domain::DomainResult;

/// CRUD over the service catalog. The repository is the sole owner of
/// service records; each operation is atomic for a single record.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Services visible to the public catalog (active only), ordered by name.
    async fn list_active(&self) -> DomainResult<Vec<Service>>;

    /// Every service regardless of the active flag, ordered by name.
    async fn list_all(&self) -> DomainResult<Vec<Service>>;

    /// Insert a new service with a generated identifier, active by default.
    /// Fails with a validation error when the input violates the invariants.
    async fn create(&self, new: NewService) -> DomainResult<Service>;

    /// Apply only the supplied fields and return the full updated record.
    /// Fails with a not-found error for an unknown identifier.
    async fn update(&self, id: &str, patch: ServicePatch) -> DomainResult<Service>;

    /// Remove the record permanently. Fails with a not-found error for an
    /// unknown identifier.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

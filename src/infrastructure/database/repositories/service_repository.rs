//! SeaORM implementation of ServiceRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    DomainError, DomainResult, NewService, Service, ServicePatch, ServiceRepository,
};
use crate::infrastructure::database::entities::service;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

fn entity_to_domain(m: service::Model) -> Service {
    Service {
        id: m.id,
        name: m.name,
        duration_minutes: m.duration_minutes,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

// ── SeaOrmServiceRepository ─────────────────────────────────────

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list_active(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .filter(service::Column::IsActive.eq(true))
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, new: NewService) -> DomainResult<Service> {
        new.validate()?;

        let now = Utc::now();
        let model = service::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new.name),
            duration_minutes: Set(new.duration_minutes),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Service created: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: &str, patch: ServicePatch) -> DomainResult<Service> {
        patch.validate()?;

        let existing = service::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Service",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut service = entity_to_domain(existing);
        patch.apply(&mut service);

        // An empty patch still refreshes the timestamp, matching the
        // storage-level UPDATE it stands for.
        let model = service::ActiveModel {
            id: Set(service.id),
            name: Set(service.name),
            duration_minutes: Set(service.duration_minutes),
            is_active: Set(service.is_active),
            created_at: Set(service.created_at),
            updated_at: Set(Utc::now()),
        };

        let result = model.update(&self.db).await.map_err(db_err)?;
        info!("Service updated: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = service::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Service",
                field: "id",
                value: id.to_string(),
            });
        }
        info!("Service deleted: {}", id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> SeaOrmServiceRepository {
        // Single connection: every pooled connection to sqlite::memory:
        // would otherwise see its own empty database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.expect("in-memory sqlite");
        Migrator::up(&db, None).await.expect("migrations");
        SeaOrmServiceRepository::new(db)
    }

    fn new_service(name: &str, minutes: i32) -> NewService {
        NewService {
            name: name.into(),
            duration_minutes: minutes,
        }
    }

    #[tokio::test]
    async fn create_returns_active_record_with_generated_id() {
        let repo = repo().await;

        let a = repo.create(new_service("Nail Trim", 15)).await.unwrap();
        let b = repo.create(new_service("Grooming", 60)).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Nail Trim");
        assert_eq!(a.duration_minutes, 15);
        assert!(a.is_active);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_inserting() {
        let repo = repo().await;

        let empty_name = repo.create(new_service("", 15)).await;
        assert!(matches!(empty_name, Err(DomainError::Validation(_))));

        let zero_duration = repo.create(new_service("Bath", 0)).await;
        assert!(matches!(zero_duration, Err(DomainError::Validation(_))));

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let repo = repo().await;
        let created = repo.create(new_service("Nail Trim", 15)).await.unwrap();

        let patch = ServicePatch {
            is_active: Some(false),
            ..Default::default()
        };
        let updated = repo.update(&created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Nail Trim");
        assert_eq!(updated.duration_minutes, 15);
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_leaves_record_intact() {
        let repo = repo().await;
        let created = repo.create(new_service("Grooming", 60)).await.unwrap();

        let updated = repo.update(&created.id, ServicePatch::default()).await.unwrap();

        assert_eq!(updated.name, created.name);
        assert_eq!(updated.duration_minutes, created.duration_minutes);
        assert_eq!(updated.is_active, created.is_active);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repo().await;
        let result = repo.update("no-such-id", ServicePatch::default()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_rejects_invalid_values_without_touching_the_record() {
        let repo = repo().await;
        let created = repo.create(new_service("Bath", 30)).await.unwrap();

        let patch = ServicePatch {
            duration_minutes: Some(-10),
            ..Default::default()
        };
        let result = repo.update(&created.id, patch).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let stored = repo.list_all().await.unwrap();
        assert_eq!(stored[0].duration_minutes, 30);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = repo().await;
        let created = repo.create(new_service("Bath", 30)).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let repo = repo().await;
        let result = repo.delete("no-such-id").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn listings_order_by_name_and_filter_on_active() {
        let repo = repo().await;
        repo.create(new_service("Wash", 20)).await.unwrap();
        let grooming = repo.create(new_service("Grooming", 60)).await.unwrap();
        repo.create(new_service("Nail Trim", 15)).await.unwrap();

        let patch = ServicePatch {
            is_active: Some(false),
            ..Default::default()
        };
        repo.update(&grooming.id, patch).await.unwrap();

        let active: Vec<String> = repo
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(active, vec!["Nail Trim", "Wash"]);

        let all: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(all, vec!["Grooming", "Nail Trim", "Wash"]);
    }
}

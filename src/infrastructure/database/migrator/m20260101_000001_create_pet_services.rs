//! Create pet_services table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PetServices::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PetServices::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PetServices::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PetServices::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PetServices::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PetServices::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Both listings order by name
        manager
            .create_index(
                Index::create()
                    .name("idx_pet_services_name")
                    .table(PetServices::Table)
                    .col(PetServices::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PetServices {
    Table,
    Id,
    Name,
    DurationMinutes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

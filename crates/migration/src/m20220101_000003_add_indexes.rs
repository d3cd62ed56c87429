use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Employee: lookup by owning company
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_company")
                    .table(Employee::Table)
                    .col(Employee::CompanyId)
                    .to_owned(),
            )
            .await?;

        // Employee: gender filter
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_gender")
                    .table(Employee::Table)
                    .col(Employee::Gender)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employee_company").table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employee_gender").table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee { Table, CompanyId, Gender }

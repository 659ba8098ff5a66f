use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lawyer::Table)
                    .if_not_exists()
                    .col(pk_auto(Lawyer::Id))
                    .col(string(Lawyer::Name))
                    .col(string(Lawyer::Specialty))
                    .col(string(Lawyer::Email))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lawyer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lawyer {
    Table,
    Id,
    Name,
    Specialty,
    Email,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentOption::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentOption::Id))
                    .col(string_uniq(AppointmentOption::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentOption {
    Table,
    Id,
    Name,
}

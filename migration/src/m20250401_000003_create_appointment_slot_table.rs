use sea_orm_migration::{prelude::*, schema::*};

use super::m20250401_000002_create_appointment_option_table::AppointmentOption;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(AppointmentSlot::Id))
                    .col(integer(AppointmentSlot::OptionId))
                    .col(string(AppointmentSlot::Label))
                    .col(integer(AppointmentSlot::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_slot_option_id")
                            .from(AppointmentSlot::Table, AppointmentSlot::OptionId)
                            .to(AppointmentOption::Table, AppointmentOption::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentSlot {
    Table,
    Id,
    OptionId,
    Label,
    Position,
}

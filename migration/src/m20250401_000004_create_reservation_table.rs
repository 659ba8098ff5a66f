use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string(Reservation::Lawsuit))
                    .col(string(Reservation::Email))
                    .col(string(Reservation::AppointmentDate))
                    .col(string(Reservation::Time))
                    .col(boolean(Reservation::Paid).default(false))
                    .col(string_null(Reservation::TransactionId))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One reservation per client per category per day. The insert path
        // relies on this index for ON CONFLICT DO NOTHING.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_booking_key")
                    .table(Reservation::Table)
                    .col(Reservation::Lawsuit)
                    .col(Reservation::Email)
                    .col(Reservation::AppointmentDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    Lawsuit,
    Email,
    AppointmentDate,
    Time,
    Paid,
    TransactionId,
    CreatedAt,
}

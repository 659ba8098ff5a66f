use sea_orm::entity::prelude::*;

/// A booked appointment. The `(lawsuit, email, appointment_date)` triple is
/// covered by a unique index created in the migration, which backs the
/// one-reservation-per-client-per-day rule.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lawsuit: String,
    pub email: String,
    pub appointment_date: String,
    pub time: String,
    pub paid: bool,
    pub transaction_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

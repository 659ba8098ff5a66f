use sea_orm::entity::prelude::*;

/// Appointment category template. The bookable time labels live in
/// `appointment_slot`, ordered by position.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment_slot::Entity")]
    AppointmentSlot,
}

impl Related<super::appointment_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

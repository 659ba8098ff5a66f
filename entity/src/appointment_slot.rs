use sea_orm::entity::prelude::*;

/// A single bookable time label within an appointment option, ordered by
/// `position` within its option.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub option_id: i32,
    pub label: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment_option::Entity",
        from = "Column::OptionId",
        to = "super::appointment_option::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AppointmentOption,
}

impl Related<super::appointment_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Appointment template data repository.
//!
//! Templates are static reference data: a category name plus an ordered list
//! of time labels. Nothing in the normal request flow mutates them.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::model::appointment::AppointmentOption;

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every appointment option with its time labels in template order.
    ///
    /// # Returns
    /// - `Ok(Vec<AppointmentOption>)` - All templates, slots ordered by position
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<AppointmentOption>, DbErr> {
        let rows = entity::prelude::AppointmentOption::find()
            .find_with_related(entity::prelude::AppointmentSlot)
            .order_by_asc(entity::appointment_option::Column::Id)
            .order_by_asc(entity::appointment_slot::Column::Position)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(option, slots)| AppointmentOption {
                id: option.id,
                name: option.name,
                times: slots.into_iter().map(|slot| slot.label).collect(),
            })
            .collect())
    }

    /// Gets the distinct category names, without loading the slots.
    pub async fn get_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::AppointmentOption::find()
            .select_only()
            .column(entity::appointment_option::Column::Name)
            .order_by_asc(entity::appointment_option::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

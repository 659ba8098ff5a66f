//! Lawyer profile data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::lawyer::{CreateLawyerParam, Lawyer};

pub struct LawyerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LawyerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all lawyer profiles, ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Lawyer>, DbErr> {
        let entities = entity::prelude::Lawyer::find()
            .order_by_asc(entity::lawyer::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lawyer::from_entity).collect())
    }

    /// Inserts a new lawyer profile.
    pub async fn create(&self, param: CreateLawyerParam) -> Result<Lawyer, DbErr> {
        let entity = entity::lawyer::ActiveModel {
            name: ActiveValue::Set(param.name),
            specialty: ActiveValue::Set(param.specialty),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lawyer::from_entity(entity))
    }

    /// Deletes a lawyer profile by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the id does not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Lawyer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

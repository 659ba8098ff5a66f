//! Lawyer profile administration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::lawyer::LawyerRepository,
    error::AppError,
    model::lawyer::{CreateLawyerParam, Lawyer},
};

pub struct LawyerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LawyerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Lawyer>, AppError> {
        let lawyers = LawyerRepository::new(self.db).get_all().await?;
        Ok(lawyers)
    }

    pub async fn create(&self, param: CreateLawyerParam) -> Result<Lawyer, AppError> {
        let lawyer = LawyerRepository::new(self.db).create(param).await?;
        Ok(lawyer)
    }

    /// Deletes a profile by id, reporting the deleted-row count back to the
    /// client in the store's acknowledgement shape.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let deleted = LawyerRepository::new(self.db).delete(id).await?;
        Ok(deleted)
    }
}

//! User and role administration business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{EnsureUserOutcome, EnsureUserParam, SetRoleParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user record on first sign-in, or reports that one exists.
    ///
    /// Calling this twice with the same email inserts exactly one row; the
    /// second call observes `AlreadyExists` and the endpoint echoes the
    /// submitted payload back unchanged.
    pub async fn ensure_user(&self, param: EnsureUserParam) -> Result<EnsureUserOutcome, AppError> {
        let outcome = UserRepository::new(self.db).ensure(param).await?;
        Ok(outcome)
    }

    /// Retrieves a user by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_email(email).await?;
        Ok(user)
    }

    /// Retrieves all users.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Assigns a role to a user by id.
    ///
    /// Callers must have passed the admin gate for the *acting* user; the
    /// assignment itself is an unconditional upsert of the role column.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected, reported back to the client
    /// - `Err(AppError)` - Database error during update
    pub async fn set_role(&self, param: SetRoleParam) -> Result<u64, AppError> {
        let modified = UserRepository::new(self.db)
            .set_role(param.user_id, &param.role)
            .await?;

        if modified == 0 {
            tracing::debug!("Role assignment for missing user id {}", param.user_id);
        }

        Ok(modified)
    }

    /// Checks whether the stored role for this email is "admin".
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        let admin = UserRepository::new(self.db).is_admin(email).await?;
        Ok(admin)
    }
}

//! User data repository.
//!
//! Handles the create-if-absent sign-in write, role assignment, and the
//! per-request admin lookups performed by the auth guard.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{EnsureUserOutcome, EnsureUserParam, User, ROLE_ADMIN};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user unless one already exists for the email.
    ///
    /// A single `INSERT ... ON CONFLICT DO NOTHING` against the unique email
    /// column, so two concurrent sign-ins for the same address still produce
    /// exactly one row. The conflict case reports `AlreadyExists` without
    /// reading the stored record back.
    ///
    /// # Arguments
    /// - `param` - Email and display name from the sign-in payload
    ///
    /// # Returns
    /// - `Ok(EnsureUserOutcome::Inserted(user))` - New user created
    /// - `Ok(EnsureUserOutcome::AlreadyExists)` - Email already registered
    /// - `Err(DbErr)` - Database error during insert
    pub async fn ensure(&self, param: EnsureUserParam) -> Result<EnsureUserOutcome, DbErr> {
        let insert = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await;

        match insert {
            Ok(entity) => Ok(EnsureUserOutcome::Inserted(User::from_entity(entity))),
            Err(DbErr::RecordNotInserted) => Ok(EnsureUserOutcome::AlreadyExists),
            Err(err) => Err(err),
        }
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users, ordered alphabetically by email.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets the role column for a user by id.
    ///
    /// The update is unconditional; assigning a role to a missing id simply
    /// affects zero rows, which the caller reports back as the update count.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the target user
    /// - `role` - Role string to store ("user" or "admin")
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, user_id: i32, role: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(Some(role.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether the stored role for this email is exactly "admin".
    ///
    /// Called by the auth guard on every admin-gated request; an absent user or
    /// any other role yields false.
    pub async fn is_admin(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Role.eq(ROLE_ADMIN))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

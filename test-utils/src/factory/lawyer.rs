//! Lawyer factory for creating test lawyer profile entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lawyers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lawyer::LawyerFactory;
///
/// let lawyer = LawyerFactory::new(&db)
///     .name("Jane Doe")
///     .specialty("Divorce")
///     .build()
///     .await?;
/// ```
pub struct LawyerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    specialty: String,
    email: String,
}

impl<'a> LawyerFactory<'a> {
    /// Creates a new LawyerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lawyer {id}"` where id is auto-incremented
    /// - specialty: `"Divorce"`
    /// - email: `"lawyer{id}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `LawyerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lawyer {}", id),
            specialty: "Divorce".to_string(),
            email: format!("lawyer{}@example.com", id),
        }
    }

    /// Sets the lawyer's display name.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the lawyer's specialty category.
    ///
    /// # Arguments
    /// - `specialty` - Appointment category the lawyer covers
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the lawyer's contact email.
    ///
    /// # Arguments
    /// - `email` - Contact email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the lawyer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::lawyer::Model)` - Created lawyer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lawyer::Model, DbErr> {
        entity::lawyer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            email: ActiveValue::Set(self.email),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lawyer with default values.
///
/// Shorthand for `LawyerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::lawyer::Model)` - Created lawyer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_lawyer(db: &DatabaseConnection) -> Result<entity::lawyer::Model, DbErr> {
    LawyerFactory::new(db).build().await
}

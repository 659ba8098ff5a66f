//! Reservation factory for creating test reservation entities.
//!
//! This module provides factory methods for creating reservation entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Provides a builder pattern for creating reservation entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db)
///     .lawsuit("Divorce")
///     .appointment_date("2024-01-05")
///     .time("10:00")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    lawsuit: String,
    email: String,
    appointment_date: String,
    time: String,
    paid: bool,
    transaction_id: Option<String>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - lawsuit: `"Divorce"`
    /// - email: `"client{id}@example.com"` where id is auto-incremented
    /// - appointment_date: `"2024-01-05"`
    /// - time: `"10:00"`
    /// - paid: `false`
    /// - transaction_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            lawsuit: "Divorce".to_string(),
            email: format!("client{}@example.com", id),
            appointment_date: "2024-01-05".to_string(),
            time: "10:00".to_string(),
            paid: false,
            transaction_id: None,
        }
    }

    /// Sets the lawsuit category.
    ///
    /// # Arguments
    /// - `lawsuit` - Appointment category name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn lawsuit(mut self, lawsuit: impl Into<String>) -> Self {
        self.lawsuit = lawsuit.into();
        self
    }

    /// Sets the client email.
    ///
    /// # Arguments
    /// - `email` - Client email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the appointment date.
    ///
    /// # Arguments
    /// - `appointment_date` - Date string as the client submitted it
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn appointment_date(mut self, appointment_date: impl Into<String>) -> Self {
        self.appointment_date = appointment_date.into();
        self
    }

    /// Sets the time slot label.
    ///
    /// # Arguments
    /// - `time` - Time label, e.g. `"10:00"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets the paid flag and transaction reference together.
    ///
    /// # Arguments
    /// - `transaction_id` - Gateway transaction reference
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn paid(mut self, transaction_id: impl Into<String>) -> Self {
        self.paid = true;
        self.transaction_id = Some(transaction_id.into());
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            lawsuit: ActiveValue::Set(self.lawsuit),
            email: ActiveValue::Set(self.email),
            appointment_date: ActiveValue::Set(self.appointment_date),
            time: ActiveValue::Set(self.time),
            paid: ActiveValue::Set(self.paid),
            transaction_id: ActiveValue::Set(self.transaction_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values.
///
/// Shorthand for `ReservationFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let reservation = create_reservation(&db).await?;
/// ```
pub async fn create_reservation(
    db: &DatabaseConnection,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db).build().await
}

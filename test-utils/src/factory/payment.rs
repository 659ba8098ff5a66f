//! Payment factory for creating test payment record entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payment records with customizable fields.
///
/// Payments reference a reservation, so tests normally create a reservation
/// first and pass its id here.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::payment::PaymentFactory;
///
/// let payment = PaymentFactory::new(&db, reservation.id)
///     .email("client@example.com")
///     .amount(5000)
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    transaction_id: String,
    amount: i64,
    email: String,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - transaction_id: `"txn_{id}"` where id is auto-incremented
    /// - amount: `5000` minor units
    /// - email: `"client{id}@example.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - Id of the reservation this payment settles
    ///
    /// # Returns
    /// - `PaymentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            reservation_id,
            transaction_id: format!("txn_{}", id),
            amount: 5000,
            email: format!("client{}@example.com", id),
        }
    }

    /// Sets the gateway transaction reference.
    ///
    /// # Arguments
    /// - `transaction_id` - Opaque gateway transaction id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    /// Sets the amount in minor currency units.
    ///
    /// # Arguments
    /// - `amount` - Amount in minor units
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the paying client's email.
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

    /// Builds and inserts the payment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_id: ActiveValue::Set(self.reservation_id),
            transaction_id: ActiveValue::Set(self.transaction_id),
            amount: ActiveValue::Set(self.amount),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment record with default values for the given reservation.
///
/// Shorthand for `PaymentFactory::new(db, reservation_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `reservation_id` - Id of the reservation this payment settles
///
/// # Returns
/// - `Ok(entity::payment::Model)` - Created payment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_payment(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, reservation_id).build().await
}

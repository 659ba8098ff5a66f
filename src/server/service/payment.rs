//! Payment processing business logic.
//!
//! Two operations: creating a gateway intent for a quoted fee, and recording a
//! confirmed payment against its reservation. The fee arrives in major
//! currency units and is converted to minor units (x100) before it reaches the
//! gateway or the payment table.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    gateway::PaymentGateway,
    model::payment::{Payment, RecordPaymentParam},
};

/// Converts a fee in major currency units to minor units.
///
/// Rounds to the nearest minor unit so a fee like 19.99 does not lose a cent
/// to float representation. The value is not validated: a negative fee
/// converts to a negative amount and is left for the gateway to reject.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a payment intent with the external gateway.
    ///
    /// # Arguments
    /// - `gateway` - Gateway client from application state
    /// - `price` - Reservation fee in major currency units
    ///
    /// # Returns
    /// - `Ok(String)` - Opaque client secret for the web client
    /// - `Err(AppError::GatewayErr)` - Transport failure or gateway rejection
    pub async fn create_intent(
        &self,
        gateway: &PaymentGateway,
        price: f64,
    ) -> Result<String, AppError> {
        let client_secret = gateway.create_intent(to_minor_units(price)).await?;
        Ok(client_secret)
    }

    /// Records a confirmed payment and marks its reservation paid.
    ///
    /// Both writes happen in one storage transaction; a failure on either side
    /// leaves neither.
    pub async fn record(&self, param: RecordPaymentParam) -> Result<Payment, AppError> {
        let payment = PaymentRepository::new(self.db).record(param).await?;

        tracing::info!(
            "Recorded payment {} for reservation {}",
            payment.id,
            payment.reservation_id
        );

        Ok(payment)
    }

    /// Lists a client's completed payments, most recent first.
    pub async fn completed_by_email(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        let payments = PaymentRepository::new(self.db).find_by_email(email).await?;
        Ok(payments)
    }
}

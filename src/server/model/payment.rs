//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payment::PaymentDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: i32,
    pub reservation_id: i32,
    pub transaction_id: String,
    pub amount: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            reservation_id: self.reservation_id,
            transaction_id: self.transaction_id,
            amount: self.amount,
            email: self.email,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            transaction_id: entity.transaction_id,
            amount: entity.amount,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a completed payment against a reservation.
#[derive(Debug, Clone)]
pub struct RecordPaymentParam {
    pub reservation_id: i32,
    pub transaction_id: String,
    /// Charge amount in minor currency units.
    pub amount: i64,
    pub email: String,
}

//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::reservation::ReservationDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i32,
    pub lawsuit: String,
    pub email: String,
    pub appointment_date: String,
    pub time: String,
    pub paid: bool,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            lawsuit: self.lawsuit,
            email: self.email,
            appointment_date: self.appointment_date,
            time: self.time,
            paid: self.paid,
            transaction_id: self.transaction_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            lawsuit: entity.lawsuit,
            email: entity.email,
            appointment_date: entity.appointment_date,
            time: entity.time,
            paid: entity.paid,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub lawsuit: String,
    pub email: String,
    pub appointment_date: String,
    pub time: String,
}

/// Outcome of a booking attempt.
///
/// The duplicate case is a business rejection, not a transport error: it is
/// distinguishable here at the type level and serialized as an HTTP 200 body
/// with `acknowledged: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateReservationOutcome {
    Created(Reservation),
    AlreadyReserved { appointment_date: String },
}

//! Reservation management business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{CreateReservationOutcome, CreateReservationParam, Reservation},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an appointment, enforcing one reservation per
    /// (category, client, date).
    ///
    /// The uniqueness rule is applied by the storage layer in the same
    /// statement as the insert, so concurrent duplicates resolve to a single
    /// created row with every other caller seeing `AlreadyReserved`.
    pub async fn create(
        &self,
        param: CreateReservationParam,
    ) -> Result<CreateReservationOutcome, AppError> {
        let appointment_date = param.appointment_date.clone();

        let inserted = ReservationRepository::new(self.db)
            .insert_unique(param)
            .await?;

        Ok(match inserted {
            Some(reservation) => CreateReservationOutcome::Created(reservation),
            None => CreateReservationOutcome::AlreadyReserved { appointment_date },
        })
    }

    /// Lists a client's reservations. Access control happens in the
    /// controller via the self gate.
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<Reservation>, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .find_by_email(email)
            .await?;
        Ok(reservations)
    }

    /// Fetches one reservation by id. A missing id yields `None`, which the
    /// endpoint serializes as a null success body rather than a 404.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let reservation = ReservationRepository::new(self.db).find_by_id(id).await?;
        Ok(reservation)
    }
}

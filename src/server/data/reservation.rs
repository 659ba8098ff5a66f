//! Reservation data repository.
//!
//! The booking insert and the uniqueness rule live here: the unique index on
//! `(lawsuit, email, appointment_date)` plus `ON CONFLICT DO NOTHING` makes the
//! duplicate check a single atomic statement instead of a read-then-write pair.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{CreateReservationParam, Reservation};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation unless the booking key is already taken.
    ///
    /// Concurrent attempts against the same `(lawsuit, email, appointment_date)`
    /// key serialize on the unique index; exactly one wins and the rest observe
    /// the conflict. There is deliberately no check that the requested time
    /// label is free - the availability resolver is the only slot filter.
    ///
    /// # Arguments
    /// - `param` - Category, client email, date string, and time label
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Inserted row
    /// - `Ok(None)` - Booking key already taken
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_unique(
        &self,
        param: CreateReservationParam,
    ) -> Result<Option<Reservation>, DbErr> {
        let insert = entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            lawsuit: ActiveValue::Set(param.lawsuit),
            email: ActiveValue::Set(param.email),
            appointment_date: ActiveValue::Set(param.appointment_date),
            time: ActiveValue::Set(param.time),
            paid: ActiveValue::Set(false),
            transaction_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::reservation::Column::Lawsuit,
                entity::reservation::Column::Email,
                entity::reservation::Column::AppointmentDate,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await;

        match insert {
            Ok(entity) => Ok(Some(Reservation::from_entity(entity))),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Finds all reservations whose appointment date equals the given string.
    ///
    /// The date is compared as an opaque string; a malformed date matches
    /// nothing.
    pub async fn find_by_date(&self, date: &str) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::AppointmentDate.eq(date))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds all reservations belonging to a client, newest first.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Email.eq(email))
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Finds one reservation by id.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Marks a reservation paid and stores the transaction reference.
    ///
    /// Unconditional: re-marking an already-paid reservation is a no-op beyond
    /// overwriting the same columns, so the operation is idempotent.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_paid(&self, id: i32, transaction_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .col_expr(
                entity::reservation::Column::Paid,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::reservation::Column::TransactionId,
                sea_orm::sea_query::Expr::value(Some(transaction_id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

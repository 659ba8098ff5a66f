//! Payment data repository.
//!
//! Recording a payment touches two tables: the payment row itself and the paid
//! flag on the linked reservation. Both writes run inside one transaction so a
//! payment can never exist with its reservation still marked unpaid.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::payment::{Payment, RecordPaymentParam};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a payment and flips the reservation's paid flag atomically.
    ///
    /// # Arguments
    /// - `param` - Reservation id, transaction reference, amount in minor
    ///   units, and client email
    ///
    /// # Returns
    /// - `Ok(Payment)` - The inserted payment, with the reservation updated
    /// - `Err(DbErr)` - Database error; both writes are rolled back
    pub async fn record(&self, param: RecordPaymentParam) -> Result<Payment, DbErr> {
        let entity = self
            .db
            .transaction::<_, entity::payment::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let payment = entity::payment::ActiveModel {
                        reservation_id: ActiveValue::Set(param.reservation_id),
                        transaction_id: ActiveValue::Set(param.transaction_id.clone()),
                        amount: ActiveValue::Set(param.amount),
                        email: ActiveValue::Set(param.email),
                        created_at: ActiveValue::Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    entity::prelude::Reservation::update_many()
                        .filter(entity::reservation::Column::Id.eq(param.reservation_id))
                        .col_expr(
                            entity::reservation::Column::Paid,
                            sea_orm::sea_query::Expr::value(true),
                        )
                        .col_expr(
                            entity::reservation::Column::TransactionId,
                            sea_orm::sea_query::Expr::value(Some(param.transaction_id)),
                        )
                        .exec(txn)
                        .await?;

                    Ok(payment)
                })
            })
            .await
            .map_err(|err| match err {
                TransactionError::Connection(err) | TransactionError::Transaction(err) => err,
            })?;

        Ok(Payment::from_entity(entity))
    }

    /// Finds all payments for a client, most recent first.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Payment>, DbErr> {
        let entities = entity::prelude::Payment::find()
            .filter(entity::payment::Column::Email.eq(email))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payment::from_entity).collect())
    }
}

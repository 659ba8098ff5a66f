use crate::server::{data::payment::PaymentRepository, model::payment::RecordPaymentParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::reservation::ReservationFactory;

mod find_by_email;
mod record;

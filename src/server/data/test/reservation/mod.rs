use crate::server::{
    data::reservation::ReservationRepository, model::reservation::CreateReservationParam,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::reservation::ReservationFactory;

mod find_by_date;
mod find_by_email;
mod insert_unique;

fn booking(lawsuit: &str, email: &str, date: &str) -> CreateReservationParam {
    CreateReservationParam {
        lawsuit: lawsuit.to_string(),
        email: email.to_string(),
        appointment_date: date.to_string(),
        time: "10:00".to_string(),
    }
}

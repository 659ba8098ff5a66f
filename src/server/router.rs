use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{appointment, auth, lawyer, payment, reservation, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Lawyer Point API", description = "Legal-appointment booking backend"),
    paths(
        appointment::get_available_appointments,
        appointment::get_specialties,
        auth::issue_token,
        user::create_user,
        user::get_all_users,
        user::check_admin,
        user::make_admin,
        user::make_user,
        reservation::get_reservations,
        reservation::get_reservation,
        reservation::create_reservation,
        payment::create_payment_intent,
        payment::record_payment,
        payment::get_completed_payments,
        lawyer::get_lawyers,
        lawyer::create_lawyer,
        lawyer::delete_lawyer,
    )
)]
struct ApiDoc;

async fn root() -> &'static str {
    "Lawyer Point server is running"
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/availableAppointments", get(appointment::get_available_appointments))
        .route("/specialistIn", get(appointment::get_specialties))
        .route("/jwt", get(auth::issue_token))
        .route("/users", post(user::create_user).get(user::get_all_users))
        // GET checks admin status by email, PUT promotes by id; both bind the
        // same path segment.
        .route("/users/admin/{id}", get(user::check_admin).put(user::make_admin))
        .route("/users/user/{id}", put(user::make_user))
        .route(
            "/reserves",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route("/reserves/{id}", get(reservation::get_reservation))
        .route("/create-payment-intent", post(payment::create_payment_intent))
        .route("/payments", post(payment::record_payment))
        .route("/completedPayments", get(payment::get_completed_payments))
        .route("/lawyers", get(lawyer::get_lawyers).post(lawyer::create_lawyer))
        .route("/lawyers/{id}", delete(lawyer::delete_lawyer))
        .route("/openapi.json", get(openapi))
}

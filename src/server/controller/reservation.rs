use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto},
        reservation::{CreateReservationDto, ReservationConflictDto, ReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{CreateReservationOutcome, CreateReservationParam},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

#[derive(Deserialize)]
pub struct ReservationListParams {
    pub email: String,
}

/// List the authenticated client's reservations.
///
/// The query-supplied email must match the token-verified identity; the
/// parameter is never trusted alone.
///
/// # Access Control
/// - Authenticated, self only
///
/// # Returns
/// - `200 OK` - The client's reservations, newest first
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or email does not match the token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reserves",
    tag = RESERVATION_TAG,
    params(
        ("email" = String, Query, description = "Client email, must match the bearer token")
    ),
    responses(
        (status = 200, description = "The client's reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or identity mismatch", body = ErrorDto),
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReservationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_self(&params.email)
        .await?;

    let reservations = ReservationService::new(&state.db).list_by_email(&email).await?;

    let reservations_dto: Vec<_> = reservations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reservations_dto)))
}

/// Fetch one reservation by id.
///
/// A missing id resolves to a `null` body with status 200 rather than a 404,
/// matching the contract the payment page was built against.
///
/// # Returns
/// - `200 OK` - The reservation, or `null` when the id does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/reserves/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "The reservation, or null when absent", body = ReservationDto),
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(reservation.map(|r| r.into_dto()))))
}

/// Book an appointment.
///
/// At most one reservation may exist per (category, client email, date). A
/// duplicate booking is a business rejection, not a transport error: it is
/// answered with HTTP 200 and `acknowledged: false`, and callers must inspect
/// the body.
///
/// # Returns
/// - `200 OK` - Insert acknowledgement, or the conflict body naming the
///   already-booked date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reserves",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 200, description = "Reservation created or duplicate rejected", body = InsertResultDto),
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<Response, AppError> {
    let outcome = ReservationService::new(&state.db)
        .create(CreateReservationParam {
            lawsuit: payload.lawsuit,
            email: payload.email,
            appointment_date: payload.appointment_date,
            time: payload.time,
        })
        .await?;

    Ok(match outcome {
        CreateReservationOutcome::Created(reservation) => (
            StatusCode::OK,
            Json(InsertResultDto {
                acknowledged: true,
                inserted_id: reservation.id,
            }),
        )
            .into_response(),
        CreateReservationOutcome::AlreadyReserved { appointment_date } => (
            StatusCode::OK,
            Json(ReservationConflictDto {
                acknowledged: false,
                message: format!("You have reserved an appointment on {}", appointment_date),
            }),
        )
            .into_response(),
    })
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::appointment::{AppointmentOptionDto, SpecialtyDto},
    server::{error::AppError, service::appointment::AppointmentService, state::AppState},
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

#[derive(Deserialize)]
pub struct AvailabilityParams {
    /// Appointment date as an opaque string. Absent or malformed dates match
    /// zero reservations and yield full availability.
    #[serde(default)]
    pub date: String,
}

/// Get the open appointment slots per category for a date.
///
/// Returns every appointment template with the time labels already reserved
/// for the given date removed, in template order.
///
/// # Returns
/// - `200 OK` - Array of categories with their remaining time labels
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/availableAppointments",
    tag = APPOINTMENT_TAG,
    params(
        ("date" = String, Query, description = "Appointment date to resolve availability for")
    ),
    responses(
        (status = 200, description = "Remaining slots per category", body = Vec<AppointmentOptionDto>),
    ),
)]
pub async fn get_available_appointments(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<impl IntoResponse, AppError> {
    let options = AppointmentService::new(&state.db)
        .resolve(&params.date)
        .await?;

    let options_dto: Vec<_> = options.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(options_dto)))
}

/// Get the distinct appointment categories.
///
/// # Returns
/// - `200 OK` - Array of category names
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/specialistIn",
    tag = APPOINTMENT_TAG,
    responses(
        (status = 200, description = "Distinct appointment categories", body = Vec<SpecialtyDto>),
    ),
)]
pub async fn get_specialties(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let names = AppointmentService::new(&state.db).specialties().await?;

    let specialties: Vec<_> = names.into_iter().map(|name| SpecialtyDto { name }).collect();

    Ok((StatusCode::OK, Json(specialties)))
}

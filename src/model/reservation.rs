use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub lawsuit: String,
    pub email: String,
    pub appointment_date: String,
    pub time: String,
    pub paid: bool,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking request. The appointment date is an opaque string: a malformed date
/// matches no reservations and no availability filtering, same as the original
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub lawsuit: String,
    pub email: String,
    pub appointment_date: String,
    pub time: String,
}

/// Duplicate-booking rejection. Sent with HTTP 200; the client inspects
/// `acknowledged`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConflictDto {
    pub acknowledged: bool,
    pub message: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An appointment category with the time labels still open for the queried
/// date. When nothing is booked this is the full template.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentOptionDto {
    pub id: i32,
    pub name: String,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyDto {
    pub name: String,
}

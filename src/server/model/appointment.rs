//! Appointment template domain models.

use crate::model::appointment::AppointmentOptionDto;

/// An appointment category and its ordered time labels.
///
/// Loaded as static reference data; the availability resolver returns a copy
/// with the reserved labels removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentOption {
    pub id: i32,
    pub name: String,
    pub times: Vec<String>,
}

impl AppointmentOption {
    pub fn into_dto(self) -> AppointmentOptionDto {
        AppointmentOptionDto {
            id: self.id,
            name: self.name,
            times: self.times,
        }
    }
}

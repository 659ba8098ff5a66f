//! Availability resolution.
//!
//! Computes which appointment slots remain open for a given date by
//! subtracting already-reserved time labels from the static templates.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, reservation::ReservationRepository},
    error::AppError,
    model::appointment::AppointmentOption,
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the open slots per category for the given date.
    ///
    /// Loads every template and every reservation for the date, then removes
    /// each category's reserved labels from its template, preserving template
    /// order. A date with no reservations yields the templates unchanged, and
    /// reservations for a category without a template are silently ignored.
    /// The date is not validated: a malformed date matches zero reservations
    /// and resolves to full availability.
    ///
    /// # Arguments
    /// - `date` - Appointment date as an opaque string
    ///
    /// # Returns
    /// - `Ok(Vec<AppointmentOption>)` - Templates with reserved labels removed
    /// - `Err(AppError)` - Database error during either query
    pub async fn resolve(&self, date: &str) -> Result<Vec<AppointmentOption>, AppError> {
        let options = AppointmentRepository::new(self.db).get_all().await?;
        let reserved = ReservationRepository::new(self.db)
            .find_by_date(date)
            .await?;

        let resolved = options
            .into_iter()
            .map(|option| {
                let taken: Vec<&str> = reserved
                    .iter()
                    .filter(|reservation| reservation.lawsuit == option.name)
                    .map(|reservation| reservation.time.as_str())
                    .collect();

                AppointmentOption {
                    times: option
                        .times
                        .into_iter()
                        .filter(|time| !taken.contains(&time.as_str()))
                        .collect(),
                    ..option
                }
            })
            .collect();

        Ok(resolved)
    }

    /// Lists the distinct appointment categories.
    pub async fn specialties(&self) -> Result<Vec<String>, AppError> {
        let names = AppointmentRepository::new(self.db).get_names().await?;
        Ok(names)
    }
}

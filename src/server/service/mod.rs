//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They implement the business rules - availability resolution, booking
//! uniqueness, the payment double-write - and work with domain models rather
//! than DTOs or entity models.

pub mod appointment;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod token;
pub mod user;

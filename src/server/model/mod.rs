//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary, keeping business logic
//! independent of database and wire concerns.

pub mod appointment;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

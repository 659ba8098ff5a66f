//! HTTP request handlers.
//!
//! Controllers validate access with the `AuthGuard`, convert DTOs to parameter
//! models, call into the service layer, and convert domain models back to
//! DTOs. No business logic lives here.

pub mod appointment;
pub mod auth;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

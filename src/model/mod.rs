//! Wire-level DTOs shared by every endpoint.
//!
//! Field names are serialized in camelCase so the payloads stay byte-compatible
//! with the existing web client. DTOs are converted to and from domain models at
//! the controller boundary and never reach the service or data layers.

pub mod api;
pub mod appointment;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

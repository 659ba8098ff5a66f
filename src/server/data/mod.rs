//! Database repository layer for all domain entities.
//!
//! Repository structs handle the database operations for each domain in the
//! application. They use SeaORM entity models internally and return domain
//! models, keeping the data layer separate from business logic. All queries,
//! inserts, updates, and deletes go through these repositories.

pub mod appointment;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;

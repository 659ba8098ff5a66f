//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let reservation = factory::reservation::create_reservation(&db).await?;
//!
//!     // Create an appointment template with ordered slots
//!     let option = factory::appointment::create_option(&db, "Divorce", &["10:00", "11:00"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role("admin")
//!     .build()
//!     .await?;
//!
//! let reservation = factory::reservation::ReservationFactory::new(&db)
//!     .lawsuit("Divorce")
//!     .appointment_date("2024-01-05")
//!     .time("10:00")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `appointment` - Create appointment option templates with slots
//! - `reservation` - Create reservation entities
//! - `lawyer` - Create lawyer profile entities
//! - `payment` - Create payment record entities
//! - `helpers` - Shared utilities for unique test identifiers

pub mod appointment;
pub mod helpers;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use appointment::create_option;
pub use lawyer::create_lawyer;
pub use payment::create_payment;
pub use reservation::create_reservation;
pub use user::create_user;

//! SeaORM entity models for the Lawyer Point database schema.

pub mod appointment_option;
pub mod appointment_slot;
pub mod lawyer;
pub mod payment;
pub mod reservation;
pub mod user;

pub mod prelude {
    pub use super::appointment_option::Entity as AppointmentOption;
    pub use super::appointment_slot::Entity as AppointmentSlot;
    pub use super::lawyer::Entity as Lawyer;
    pub use super::payment::Entity as Payment;
    pub use super::reservation::Entity as Reservation;
    pub use super::user::Entity as User;
}

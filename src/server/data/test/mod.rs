mod lawyer;
mod payment;
mod reservation;
mod user;

pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_user_table;
mod m20250401_000002_create_appointment_option_table;
mod m20250401_000003_create_appointment_slot_table;
mod m20250401_000004_create_reservation_table;
mod m20250401_000005_create_lawyer_table;
mod m20250401_000006_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_user_table::Migration),
            Box::new(m20250401_000002_create_appointment_option_table::Migration),
            Box::new(m20250401_000003_create_appointment_slot_table::Migration),
            Box::new(m20250401_000004_create_reservation_table::Migration),
            Box::new(m20250401_000005_create_lawyer_table::Migration),
            Box::new(m20250401_000006_create_payment_table::Migration),
        ]
    }
}

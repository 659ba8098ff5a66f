//! Appointment template factory.
//!
//! Creates appointment option templates together with their ordered time
//! slots, since an option without slots never appears in availability.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an appointment option with the given time labels.
///
/// Slots are inserted with positions matching the order of `times`, so
/// availability resolution returns them in exactly this order.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Category name, e.g. `"Divorce"`
/// - `times` - Time labels in display order
///
/// # Returns
/// - `Ok(entity::appointment_option::Model)` - Created option entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let option = create_option(&db, "Divorce", &["10:00", "11:00"]).await?;
/// ```
pub async fn create_option(
    db: &DatabaseConnection,
    name: &str,
    times: &[&str],
) -> Result<entity::appointment_option::Model, DbErr> {
    let option = entity::appointment_option::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
    }
    .insert(db)
    .await?;

    for (position, label) in times.iter().enumerate() {
        entity::appointment_slot::ActiveModel {
            id: ActiveValue::NotSet,
            option_id: ActiveValue::Set(option.id),
            label: ActiveValue::Set(label.to_string()),
            position: ActiveValue::Set(position as i32),
        }
        .insert(db)
        .await?;
    }

    Ok(option)
}

/// Creates an appointment option with a unique generated name and no slots.
///
/// Useful for tests that only care about the category listing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::appointment_option::Model)` - Created option entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_empty_option(
    db: &DatabaseConnection,
) -> Result<entity::appointment_option::Model, DbErr> {
    create_option(db, &format!("Category {}", next_id()), &[]).await
}

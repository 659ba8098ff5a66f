use super::*;

/// Tests inserting a fresh booking.
///
/// Verifies that the row comes back unpaid with the submitted fields.
///
/// Expected: Ok(Some) with paid false and no transaction reference
#[tokio::test]
async fn inserts_fresh_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let inserted = repo
        .insert_unique(booking("Divorce", "client@example.com", "2024-01-05"))
        .await?;

    let reservation = inserted.expect("expected an inserted reservation");
    assert_eq!(reservation.lawsuit, "Divorce");
    assert_eq!(reservation.email, "client@example.com");
    assert_eq!(reservation.appointment_date, "2024-01-05");
    assert!(!reservation.paid);
    assert_eq!(reservation.transaction_id, None);

    Ok(())
}

/// Tests the duplicate booking key.
///
/// Verifies that a second insert for the same (category, email, date) hits the
/// unique index and reports None, leaving a single stored row.
///
/// Expected: Ok(None) and one reservation in the table
#[tokio::test]
async fn duplicate_key_reports_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    repo.insert_unique(booking("Divorce", "client@example.com", "2024-01-05"))
        .await?;

    let second = repo
        .insert_unique(booking("Divorce", "client@example.com", "2024-01-05"))
        .await?;

    assert_eq!(second, None);

    let stored = repo.find_by_email("client@example.com").await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that changing any component of the booking key allows the insert.
///
/// Expected: Ok(Some) for a different category, client, and date
#[tokio::test]
async fn different_key_components_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    repo.insert_unique(booking("Divorce", "client@example.com", "2024-01-05"))
        .await?;

    let other_category = repo
        .insert_unique(booking("Property", "client@example.com", "2024-01-05"))
        .await?;
    let other_client = repo
        .insert_unique(booking("Divorce", "other@example.com", "2024-01-05"))
        .await?;
    let other_date = repo
        .insert_unique(booking("Divorce", "client@example.com", "2024-01-06"))
        .await?;

    assert!(other_category.is_some());
    assert!(other_client.is_some());
    assert!(other_date.is_some());

    Ok(())
}

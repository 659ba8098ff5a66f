use super::*;

/// Tests that only reservations matching the exact date string are returned.
///
/// Expected: Ok with the single matching reservation
#[tokio::test]
async fn matches_exact_date_string() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReservationFactory::new(db)
        .appointment_date("2024-01-05")
        .build()
        .await?;
    ReservationFactory::new(db)
        .appointment_date("2024-01-06")
        .build()
        .await?;

    let found = ReservationRepository::new(db)
        .find_by_date("2024-01-05")
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].appointment_date, "2024-01-05");

    Ok(())
}

/// Tests that a date with no reservations yields an empty list. A malformed
/// date behaves the same way since the comparison is an opaque string match.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn unmatched_date_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ReservationFactory::new(db)
        .appointment_date("2024-01-05")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    assert!(repo.find_by_date("2024-02-01").await?.is_empty());
    assert!(repo.find_by_date("not-a-date").await?.is_empty());

    Ok(())
}

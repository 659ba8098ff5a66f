use super::*;

/// Tests listing a client's reservations newest first.
///
/// Expected: Ok with only that client's rows, in descending id order
#[tokio::test]
async fn lists_client_reservations_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = ReservationFactory::new(db)
        .email("client@example.com")
        .appointment_date("2024-01-05")
        .build()
        .await?;
    let second = ReservationFactory::new(db)
        .email("client@example.com")
        .appointment_date("2024-01-06")
        .build()
        .await?;
    ReservationFactory::new(db)
        .email("other@example.com")
        .build()
        .await?;

    let found = ReservationRepository::new(db)
        .find_by_email("client@example.com")
        .await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, second.id);
    assert_eq!(found[1].id, first.id);

    Ok(())
}

/// Tests listing reservations for a client with none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn unknown_client_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ReservationRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_empty());

    Ok(())
}

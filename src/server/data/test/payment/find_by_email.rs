use super::*;
use test_utils::factory::payment::PaymentFactory;

/// Tests listing a client's payments most recent first.
///
/// Expected: Ok with only that client's payments, newest first
#[tokio::test]
async fn lists_client_payments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = ReservationFactory::new(db).build().await?;

    let first = PaymentFactory::new(db, reservation.id)
        .email("client@example.com")
        .build()
        .await?;
    let second = PaymentFactory::new(db, reservation.id)
        .email("client@example.com")
        .build()
        .await?;
    PaymentFactory::new(db, reservation.id)
        .email("other@example.com")
        .build()
        .await?;

    let found = PaymentRepository::new(db)
        .find_by_email("client@example.com")
        .await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, second.id);
    assert_eq!(found[1].id, first.id);

    Ok(())
}

/// Tests listing payments for a client with none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn unknown_client_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PaymentRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_empty());

    Ok(())
}

use super::*;
use crate::server::data::reservation::ReservationRepository;

/// Tests recording a payment against a reservation.
///
/// Verifies both halves of the transactional write: the payment row exists
/// and the linked reservation is marked paid with the same transaction
/// reference.
///
/// Expected: Ok with the payment stored and the reservation updated
#[tokio::test]
async fn records_payment_and_marks_reservation_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = ReservationFactory::new(db)
        .email("client@example.com")
        .build()
        .await?;

    let payment = PaymentRepository::new(db)
        .record(RecordPaymentParam {
            reservation_id: reservation.id,
            transaction_id: "txn_123".to_string(),
            amount: 5000,
            email: "client@example.com".to_string(),
        })
        .await?;

    assert_eq!(payment.reservation_id, reservation.id);
    assert_eq!(payment.transaction_id, "txn_123");
    assert_eq!(payment.amount, 5000);

    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert!(stored.paid);
    assert_eq!(stored.transaction_id, Some("txn_123".to_string()));

    Ok(())
}

/// Tests recording a second payment against the same reservation.
///
/// Nothing deduplicates payments; each confirmation inserts its own row and
/// the reservation keeps the latest transaction reference.
///
/// Expected: Ok with two payment rows and the reservation carrying the
/// second reference
#[tokio::test]
async fn second_payment_inserts_and_overwrites_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = ReservationFactory::new(db)
        .email("client@example.com")
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    for transaction_id in ["txn_1", "txn_2"] {
        repo.record(RecordPaymentParam {
            reservation_id: reservation.id,
            transaction_id: transaction_id.to_string(),
            amount: 5000,
            email: "client@example.com".to_string(),
        })
        .await?;
    }

    let payments = repo.find_by_email("client@example.com").await?;
    assert_eq!(payments.len(), 2);

    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.transaction_id, Some("txn_2".to_string()));

    Ok(())
}

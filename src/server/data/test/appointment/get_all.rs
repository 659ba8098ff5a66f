use super::*;

/// Tests loading templates with their slots in template order.
///
/// Verifies that slot labels come back ordered by position, not by insertion
/// id or label value.
///
/// Expected: Ok with labels in the order the template defined them
#[tokio::test]
async fn loads_slots_in_template_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_option(db, "Divorce", &["10:00", "09:00", "11:00"]).await?;

    let options = AppointmentRepository::new(db).get_all().await?;

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].name, "Divorce");
    assert_eq!(
        options[0].times,
        vec!["10:00".to_string(), "09:00".to_string(), "11:00".to_string()]
    );

    Ok(())
}

/// Tests loading multiple templates.
///
/// Verifies that options come back ordered by id with each option carrying
/// only its own slots.
///
/// Expected: Ok with both templates and their respective labels
#[tokio::test]
async fn keeps_slots_with_their_option() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_option(db, "Divorce", &["10:00"]).await?;
    create_option(db, "Property", &["11:00", "12:00"]).await?;

    let options = AppointmentRepository::new(db).get_all().await?;

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].name, "Divorce");
    assert_eq!(options[0].times, vec!["10:00".to_string()]);
    assert_eq!(options[1].name, "Property");
    assert_eq!(
        options[1].times,
        vec!["11:00".to_string(), "12:00".to_string()]
    );

    Ok(())
}

/// Tests loading templates from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn empty_table_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let options = AppointmentRepository::new(db).get_all().await?;

    assert!(options.is_empty());

    Ok(())
}

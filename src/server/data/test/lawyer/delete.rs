use super::*;

/// Tests deleting a lawyer profile by id.
///
/// Expected: Ok(1) and the profile gone from the listing
#[tokio::test]
async fn deletes_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lawyer = LawyerFactory::new(db).build().await?;

    let repo = LawyerRepository::new(db);
    let deleted = repo.delete(lawyer.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}

/// Tests deleting a missing id.
///
/// Expected: Ok(0) without an error
#[tokio::test]
async fn missing_id_deletes_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = LawyerRepository::new(db).delete(999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

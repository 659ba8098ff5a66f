use super::*;

/// Tests inserting a lawyer profile.
///
/// Expected: Ok with the stored fields and a generated id
#[tokio::test]
async fn inserts_lawyer_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lawyer = LawyerRepository::new(db)
        .create(CreateLawyerParam {
            name: "Jane Doe".to_string(),
            specialty: "Divorce".to_string(),
            email: "jane@example.com".to_string(),
        })
        .await?;

    assert!(lawyer.id > 0);
    assert_eq!(lawyer.name, "Jane Doe");
    assert_eq!(lawyer.specialty, "Divorce");
    assert_eq!(lawyer.email, "jane@example.com");

    Ok(())
}

use super::*;
use test_utils::factory::user::UserFactory;

/// Tests the admin check for a user with the admin role.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(ROLE_ADMIN).build().await?;

    let is_admin = UserRepository::new(db).is_admin(&user.email).await?;

    assert!(is_admin);

    Ok(())
}

/// Tests the admin check for a user with the regular role.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_user_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(ROLE_USER).build().await?;

    let is_admin = UserRepository::new(db).is_admin(&user.email).await?;

    assert!(!is_admin);

    Ok(())
}

/// Tests the admin check for a user with no role assigned.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_unassigned_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let is_admin = UserRepository::new(db).is_admin(&user.email).await?;

    assert!(!is_admin);

    Ok(())
}

/// Tests the admin check for an email with no user record at all.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let is_admin = UserRepository::new(db)
        .is_admin("nobody@example.com")
        .await?;

    assert!(!is_admin);

    Ok(())
}

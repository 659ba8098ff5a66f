use super::*;
use test_utils::factory::user::UserFactory;

/// Tests promoting a user to admin.
///
/// Verifies that the role column is updated and the affected-row count is 1.
///
/// Expected: Ok(1) and the stored role is "admin"
#[tokio::test]
async fn promotes_user_to_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let affected = repo.set_role(user.id, ROLE_ADMIN).await?;

    assert_eq!(affected, 1);

    let stored = repo.find_by_email(&user.email).await?.unwrap();
    assert_eq!(stored.role, Some(ROLE_ADMIN.to_string()));

    Ok(())
}

/// Tests demoting an admin back to a regular user.
///
/// Expected: Ok(1) and the stored role is "user"
#[tokio::test]
async fn demotes_admin_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role(ROLE_ADMIN).build().await?;

    let repo = UserRepository::new(db);
    let affected = repo.set_role(user.id, ROLE_USER).await?;

    assert_eq!(affected, 1);

    let stored = repo.find_by_email(&user.email).await?.unwrap();
    assert_eq!(stored.role, Some(ROLE_USER.to_string()));

    Ok(())
}

/// Tests assigning a role to a missing id.
///
/// Verifies that the update affects zero rows rather than erroring, which the
/// endpoint reports back as a modified count of 0.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_id_affects_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let affected = repo.set_role(999, ROLE_ADMIN).await?;

    assert_eq!(affected, 0);

    Ok(())
}

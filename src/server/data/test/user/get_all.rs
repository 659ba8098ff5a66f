use super::*;
use test_utils::factory::user::UserFactory;

/// Tests listing all users ordered by email.
///
/// Expected: Ok with every user present in alphabetical email order
#[tokio::test]
async fn lists_users_ordered_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("b@example.com").build().await?;
    UserFactory::new(db).email("a@example.com").build().await?;
    UserFactory::new(db).email("c@example.com").build().await?;

    let users = UserRepository::new(db).get_all().await?;

    let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn empty_table_yields_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

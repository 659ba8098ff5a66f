use super::*;

/// Tests creating a user on first sign-in.
///
/// Verifies that the repository inserts a new row with no role assigned and
/// reports the inserted user.
///
/// Expected: Ok(Inserted) with the submitted email and name, role None
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let outcome = repo
        .ensure(EnsureUserParam {
            email: "client@example.com".to_string(),
            name: "Client".to_string(),
        })
        .await?;

    let EnsureUserOutcome::Inserted(user) = outcome else {
        panic!("expected an inserted user");
    };
    assert_eq!(user.email, "client@example.com");
    assert_eq!(user.name, "Client");
    assert_eq!(user.role, None);

    Ok(())
}

/// Tests the create-if-absent behavior for a repeat sign-in.
///
/// Verifies that a second insert for the same email conflicts on the unique
/// email column and reports AlreadyExists without touching the stored row.
///
/// Expected: Ok(AlreadyExists) and the original name preserved
#[tokio::test]
async fn repeat_sign_in_reports_already_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.ensure(EnsureUserParam {
        email: "client@example.com".to_string(),
        name: "Original".to_string(),
    })
    .await?;

    let outcome = repo
        .ensure(EnsureUserParam {
            email: "client@example.com".to_string(),
            name: "Changed".to_string(),
        })
        .await?;

    assert_eq!(outcome, EnsureUserOutcome::AlreadyExists);

    let stored = repo.find_by_email("client@example.com").await?.unwrap();
    assert_eq!(stored.name, "Original");

    Ok(())
}

/// Tests that distinct emails each get their own row.
///
/// Expected: Ok(Inserted) for both sign-ins
#[tokio::test]
async fn distinct_emails_both_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let first = repo
        .ensure(EnsureUserParam {
            email: "one@example.com".to_string(),
            name: "One".to_string(),
        })
        .await?;
    let second = repo
        .ensure(EnsureUserParam {
            email: "two@example.com".to_string(),
            name: "Two".to_string(),
        })
        .await?;

    assert!(matches!(first, EnsureUserOutcome::Inserted(_)));
    assert!(matches!(second, EnsureUserOutcome::Inserted(_)));

    Ok(())
}

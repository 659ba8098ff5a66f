use super::*;

/// Tests the self gate when the query email matches the token identity.
///
/// Expected: Ok with the verified email
#[tokio::test]
async fn matching_email_grants_access() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let token = tokens.issue("client@example.com").unwrap();
    let headers = bearer(&token);

    let email = AuthGuard::new(db, &tokens, &headers)
        .require_self("client@example.com")
        .await
        .unwrap();

    assert_eq!(email, "client@example.com");
}

/// Tests the self gate when the query email names somebody else.
///
/// Verifies that the token identity wins and the request is refused rather
/// than served with the other client's data.
///
/// Expected: Err(AuthError::IdentityMismatch) carrying the verified email
#[tokio::test]
async fn mismatched_email_is_forbidden() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let token = tokens.issue("client@example.com").unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require_self("other@example.com")
        .await;

    assert_eq!(
        auth_error(result),
        AuthError::IdentityMismatch("client@example.com".to_string())
    );
}

/// Tests the self gate with no credentials at all.
///
/// Expected: Err(AuthError::MissingAuthHeader), the 401 case
#[tokio::test]
async fn missing_header_is_unauthorized() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require_self("client@example.com")
        .await;

    assert_eq!(auth_error(result), AuthError::MissingAuthHeader);
}

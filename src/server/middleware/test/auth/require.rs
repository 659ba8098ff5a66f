use super::*;

/// Tests the request with no Authorization header at all.
///
/// Verifies that the guard rejects before touching the token service or the
/// database.
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

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert_eq!(auth_error(result), AuthError::MissingAuthHeader);
}

/// Tests a header without the Bearer prefix.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn header_without_bearer_prefix_is_forbidden() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, "not-a-bearer-token".parse().unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert_eq!(auth_error(result), AuthError::InvalidToken);
}

/// Tests a bearer token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn foreign_token_is_forbidden() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let other = TokenService::new("other-secret");
    let token = other.issue("client@example.com").unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert_eq!(auth_error(result), AuthError::InvalidToken);
}

/// Tests the authenticated gate with no extra permissions.
///
/// Verifies that a valid token alone grants access and that the guard yields
/// the token-verified email, even without a user record.
///
/// Expected: Ok with the embedded email
#[tokio::test]
async fn valid_token_grants_access() {
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
        .require(&[])
        .await
        .unwrap();

    assert_eq!(email, "client@example.com");
}

/// Tests the admin gate for a user with the admin role.
///
/// Expected: Ok with the admin's email
#[tokio::test]
async fn admin_passes_admin_gate() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .build()
        .await
        .unwrap();

    let tokens = TokenService::new("test-secret");
    let token = tokens.issue("admin@example.com").unwrap();
    let headers = bearer(&token);

    let email = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert_eq!(email, "admin@example.com");
}

/// Tests the admin gate for a user without the admin role.
///
/// Verifies that a valid token does not bypass the role check.
///
/// Expected: Err(AuthError::AccessDenied) carrying the email
#[tokio::test]
async fn non_admin_is_denied_admin_gate() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("client@example.com")
        .role("user")
        .build()
        .await
        .unwrap();

    let tokens = TokenService::new("test-secret");
    let token = tokens.issue("client@example.com").unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert_eq!(
        auth_error(result),
        AuthError::AccessDenied("client@example.com".to_string())
    );
}

/// Tests the admin gate for a token whose email has no user record.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn unknown_email_is_denied_admin_gate() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenService::new("test-secret");
    let token = tokens.issue("ghost@example.com").unwrap();
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert_eq!(
        auth_error(result),
        AuthError::AccessDenied("ghost@example.com".to_string())
    );
}

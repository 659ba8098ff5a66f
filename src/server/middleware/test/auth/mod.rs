use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod require;
mod require_self;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, format!("Bearer {}", token).parse().unwrap());
    headers
}

fn auth_error(result: Result<String, AppError>) -> AuthError {
    match result {
        Err(AppError::AuthErr(err)) => err,
        other => panic!("expected an auth error, got {:?}", other.map(|_| ())),
    }
}

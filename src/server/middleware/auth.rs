use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Per-request authentication and authorization guard.
///
/// Stage one requires a valid `Authorization: Bearer <token>` header and yields
/// the token-verified email. Stage two (`Permission::Admin`) looks the user up
/// by that email on every request - roles can change between requests, so the
/// result is never cached.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Runs the authenticated gate, then each requested permission gate.
    ///
    /// # Arguments
    /// - `permissions` - Additional gates to apply after token verification
    ///
    /// # Returns
    /// - `Ok(String)` - The token-verified email
    /// - `Err(AppError::AuthErr)` - 401 when the header is missing, 403 when
    ///   the token is invalid/expired or a permission gate fails
    pub async fn require(&self, permissions: &[Permission]) -> Result<String, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingAuthHeader.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::InvalidToken)?;

        let email = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let user_repo = UserRepository::new(self.db);
                    if !user_repo.is_admin(&email).await? {
                        return Err(AuthError::AccessDenied(email).into());
                    }
                }
            }
        }

        Ok(email)
    }

    /// Authenticated gate plus an identity check against a query-supplied email.
    ///
    /// Self-access routes must compare the query parameter with the verified
    /// identity; the parameter alone is never trusted.
    pub async fn require_self(&self, email: &str) -> Result<String, AppError> {
        let verified = self.require(&[]).await?;

        if verified != email {
            return Err(AuthError::IdentityMismatch(verified).into());
        }

        Ok(verified)
    }
}

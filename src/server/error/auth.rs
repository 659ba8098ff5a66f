use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on a guarded route.
    ///
    /// Missing credentials are a 401; every other auth failure is a 403.
    #[error("Request is missing the Authorization header")]
    MissingAuthHeader,

    /// Bearer token failed signature validation or has expired.
    #[error("Access token is invalid or expired")]
    InvalidToken,

    /// Query-supplied identity does not match the token-verified identity.
    ///
    /// Self-access routes compare the two and never trust the query parameter
    /// alone.
    #[error("Authenticated user '{0}' attempted to read another client's records")]
    IdentityMismatch(String),

    /// Authenticated user lacks the admin role required by the route.
    #[error("User '{0}' does not have the required admin role")]
    AccessDenied(String),

    /// Token issuance was requested for an email with no user record.
    #[error("No user record for '{0}', refusing to issue a token")]
    UnknownEmail(String),
}

/// Converts authentication errors into HTTP responses.
///
/// The client-facing bodies reuse the exact phrases the original service sent,
/// while the variant messages above are logged for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - Missing credentials
/// - 403 Forbidden - Invalid/expired token, identity mismatch, or role failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingAuthHeader => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "unauthorized access".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken
            | Self::IdentityMismatch(_)
            | Self::AccessDenied(_)
            | Self::UnknownEmail(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "forbidden access".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

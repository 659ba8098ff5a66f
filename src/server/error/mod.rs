//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and
//! implements `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod gateway;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, gateway::GatewayError},
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like
/// `AuthError` handle their own response mapping; infrastructure errors fall
/// through to a logged 500 with a generic body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Payment gateway error. The store and gateway are the only upstreams;
    /// their faults surface as server errors with details kept out of the body.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Token signing failure. Verification failures are `AuthError`s; this only
    /// covers issuance, which should never fail with a valid secret.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Socket bind/serve error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error, resulting in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, resulting in 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. The message is logged but a
    /// generic body is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Authentication errors delegate to their own response handling; `NotFound`
/// and `BadRequest` carry their message; everything else is logged server-side
/// and answered with a generic 500 to avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the error message and returns a generic "Internal server error" body so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

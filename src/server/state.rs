//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. Everything the original
//! service kept as process-wide singletons (database handle, signing secret,
//! gateway credentials) is carried here instead and injected explicitly.

use sea_orm::DatabaseConnection;

use crate::server::{gateway::PaymentGateway, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the derived signing keys
/// - `PaymentGateway` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the signed access tokens used by the auth guard.
    pub tokens: TokenService,

    /// HTTP client for the external payment gateway.
    pub gateway: PaymentGateway,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, gateway: PaymentGateway) -> Self {
        Self {
            db,
            tokens,
            gateway,
        }
    }
}

//! Signed access tokens keyed by email.
//!
//! Tokens are HS256 JWTs carrying a single `email` claim with a fixed one-hour
//! validity window. Issuance and verification are pure operations over keys
//! derived once from the configured secret; no per-request state is involved.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Token validity window in seconds.
const TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    email: String,
    exp: i64,
}

/// Issues and verifies the bearer tokens checked by the auth guard.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token embedding the email claim, valid for one hour.
    ///
    /// Callers are expected to have checked that a user record exists for this
    /// email; issuance itself is keyed to sign-in, not arbitrary identity
    /// claims.
    ///
    /// # Arguments
    /// - `email` - Verified email of the signing-in user
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::TokenErr)` - Signing failure
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let claims = Claims {
            email: email.to_string(),
            exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies a token and returns the embedded email claim.
    ///
    /// Fails with `InvalidToken` when the signature does not match or the token
    /// has expired. Expiry is checked without leeway so a token is rejected the
    /// moment its window closes.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(data.claims.email)
    }
}

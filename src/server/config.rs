use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PAYMENT_API_URL: &str = "https://api.stripe.com";
const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,

    /// Shared secret for signing and verifying access tokens.
    pub access_token_secret: String,

    pub payment_secret_key: String,
    pub payment_api_url: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), value))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("ACCESS_TOKEN_SECRET".to_string()))?,
            payment_secret_key: std::env::var("PAYMENT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("PAYMENT_SECRET_KEY".to_string()))?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_API_URL.to_string()),
            port,
        })
    }
}

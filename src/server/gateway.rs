//! HTTP client for the external payment gateway.
//!
//! The gateway is treated as an opaque collaborator: given an amount in minor
//! currency units it returns a client secret the web client uses to complete
//! the charge. Only card payments in USD are ever requested.

use serde::Deserialize;

use crate::server::error::gateway::GatewayError;

const CURRENCY: &str = "usd";

/// Client for the payment-intent API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct PaymentGateway {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

/// The subset of the gateway's intent response the backend cares about.
#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

impl PaymentGateway {
    pub fn new(client: reqwest::Client, api_url: String, secret_key: String) -> Self {
        Self {
            client,
            api_url,
            secret_key,
        }
    }

    /// Creates a payment intent for the given amount in minor currency units.
    ///
    /// The amount is forwarded unvalidated; a negative or out-of-range value is
    /// rejected by the gateway and surfaces as `GatewayError::Rejected`.
    ///
    /// # Arguments
    /// - `amount` - Charge amount in minor currency units
    ///
    /// # Returns
    /// - `Ok(String)` - Opaque client secret for the created intent
    /// - `Err(GatewayError)` - Transport failure or gateway rejection
    pub async fn create_intent(&self, amount: i64) -> Result<String, GatewayError> {
        let params = [
            ("amount", amount.to_string()),
            ("currency", CURRENCY.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_intents", self.api_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected { status, message });
        }

        let intent = response.json::<PaymentIntentResponse>().await?;
        Ok(intent.client_secret)
    }
}

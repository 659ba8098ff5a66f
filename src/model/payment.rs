use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub reservation_id: i32,
    pub transaction_id: String,
    pub amount: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Fee in major currency units, as quoted to the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentDto {
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentDto {
    pub client_secret: String,
}

/// Confirmation posted by the client after the gateway accepts the charge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentDto {
    pub reservation_id: i32,
    pub transaction_id: String,
    pub price: f64,
    pub email: String,
}

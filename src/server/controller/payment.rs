use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, InsertResultDto},
        payment::{CreatePaymentIntentDto, PaymentDto, PaymentIntentDto, RecordPaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::payment::RecordPaymentParam,
        service::payment::{to_minor_units, PaymentService},
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
pub struct PaymentListParams {
    pub email: String,
}

/// Create a payment intent with the external gateway.
///
/// The quoted fee is converted to minor currency units (x100) and forwarded as
/// a card-only USD charge. The fee is not validated; an amount the gateway
/// refuses surfaces as a server fault.
///
/// # Returns
/// - `200 OK` - Opaque client secret for completing the charge
/// - `500 Internal Server Error` - Gateway or transport failure
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for the created intent", body = PaymentIntentDto),
    ),
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentDto>,
) -> Result<impl IntoResponse, AppError> {
    let client_secret = PaymentService::new(&state.db)
        .create_intent(&state.gateway, payload.price)
        .await?;

    Ok((StatusCode::OK, Json(PaymentIntentDto { client_secret })))
}

/// Record a confirmed payment.
///
/// Inserts the payment and marks the linked reservation paid in one storage
/// transaction, so a payment can never be orphaned from its reservation
/// update.
///
/// # Returns
/// - `200 OK` - Insert acknowledgement for the payment record
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/payments",
    tag = PAYMENT_TAG,
    request_body = RecordPaymentDto,
    responses(
        (status = 200, description = "Payment recorded and reservation marked paid", body = InsertResultDto),
    ),
)]
pub async fn record_payment(
    State(state): State<AppState>,
    Json(payload): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payment = PaymentService::new(&state.db)
        .record(RecordPaymentParam {
            reservation_id: payload.reservation_id,
            transaction_id: payload.transaction_id,
            amount: to_minor_units(payload.price),
            email: payload.email,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(InsertResultDto {
            acknowledged: true,
            inserted_id: payment.id,
        }),
    ))
}

/// List the authenticated client's completed payments, most recent first.
///
/// # Access Control
/// - Authenticated, self only
///
/// # Returns
/// - `200 OK` - The client's payments, newest first
/// - `401 Unauthorized` - Missing credentials
/// - `403 Forbidden` - Invalid token or email does not match the token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/completedPayments",
    tag = PAYMENT_TAG,
    params(
        ("email" = String, Query, description = "Client email, must match the bearer token")
    ),
    responses(
        (status = 200, description = "The client's payments", body = Vec<PaymentDto>),
        (status = 401, description = "Missing credentials", body = ErrorDto),
        (status = 403, description = "Invalid token or identity mismatch", body = ErrorDto),
    ),
)]
pub async fn get_completed_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaymentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let email = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require_self(&params.email)
        .await?;

    let payments = PaymentService::new(&state.db).completed_by_email(&email).await?;

    let payments_dto: Vec<_> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(payments_dto)))
}

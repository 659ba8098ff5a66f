use thiserror::Error;

/// Failures talking to the external payment gateway.
///
/// There is no retry or circuit breaking: a gateway fault fails the request it
/// occurred on and surfaces as a generic server error to the client.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport-level failure (connect, timeout, malformed response body).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status, e.g. for a negative or
    /// out-of-range amount, which is forwarded unvalidated.
    #[error("Payment gateway rejected the request with status {status}: {message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },
}

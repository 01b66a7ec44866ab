//! Settlement provider error types.

/// Errors raised while asking a provider to settle a payment.
///
/// None of these ever mean "the payment was rejected": a rejection is a
/// successful [`SettlementOutcome::Rejected`](super::SettlementOutcome) response.
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    /// The request is missing data the provider needs. Raised before any I/O.
    #[error("invalid payment request: {0}")]
    InvalidRequest(String),
    /// Client certificate or key could not be loaded.
    #[error("failed to load client certificate: {0}")]
    Certificate(String),
    /// Connection, TLS or protocol failure.
    #[error("HTTP error calling {endpoint}: {message}")]
    Transport { endpoint: String, message: String },
    /// The bounded request timeout elapsed.
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },
    /// Token exchange answered with status >= 400.
    #[error("token request failed with status: {status}")]
    Authentication { status: u16, body: String },
    /// Issuance answered with status >= 400.
    #[error("error creating invoice: {reference}, {status}, {body}")]
    Upstream {
        reference: String,
        status: u16,
        body: String,
    },
    /// Response body did not match the expected shape.
    #[error("failed to deserialize response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

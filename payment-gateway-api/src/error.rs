use thiserror::Error;

use crate::domain::invoice::InvoiceStatus;
use crate::payment::SettlementError;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("invalid amount: must be greater than zero")]
    InvalidAmount,

    #[error("invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: InvoiceStatus,
        to: InvoiceStatus,
    },

    #[error("account not found")]
    AccountNotFound,

    #[error("invoice not found")]
    InvoiceNotFound,

    #[error("api key already exists")]
    DuplicateApiKey,

    #[error("method not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Settlement error: {0}")]
    Settlement(#[from] SettlementError),

    #[error("Database error: {0}")]
    Database(String),
}

/// Coarse classification used by the HTTP layer to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 400
    ClientFault,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 501
    Unsupported,
    /// 502
    Upstream,
    /// 500
    Internal,
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation(_)
            | GatewayError::InvalidAmount
            | GatewayError::InvalidStatusTransition { .. } => ErrorKind::ClientFault,
            GatewayError::AccountNotFound | GatewayError::InvoiceNotFound => ErrorKind::NotFound,
            GatewayError::DuplicateApiKey => ErrorKind::Conflict,
            GatewayError::NotImplemented(_) => ErrorKind::Unsupported,
            GatewayError::Settlement(SettlementError::InvalidRequest(_)) => ErrorKind::ClientFault,
            GatewayError::Settlement(_) => ErrorKind::Upstream,
            GatewayError::Database(_) => ErrorKind::Internal,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

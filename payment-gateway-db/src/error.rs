use payment_gateway_api::{GatewayError, SettlementError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("invoice not found: {0}")]
    InvoiceNotFound(Uuid),

    /// A uniqueness constraint rejected the write.
    #[error("duplicate value for {0}")]
    Conflict(&'static str),

    #[error("method not implemented: {0}")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Settlement(#[from] SettlementError),

    /// A stored row could not be turned back into a domain value.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<RepositoryError> for GatewayError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AccountNotFound(_) => GatewayError::AccountNotFound,
            RepositoryError::InvoiceNotFound(_) => GatewayError::InvoiceNotFound,
            RepositoryError::Conflict("api_key") => GatewayError::DuplicateApiKey,
            RepositoryError::Conflict(field) => {
                GatewayError::Validation(format!("duplicate value for {field}"))
            }
            RepositoryError::NotImplemented(method) => GatewayError::NotImplemented(method),
            RepositoryError::Settlement(e) => GatewayError::Settlement(e),
            RepositoryError::Database(e) => GatewayError::Database(e.to_string()),
            RepositoryError::Decode(msg) => GatewayError::Database(msg),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

use async_trait::async_trait;
use payment_gateway_api::Invoice;

use crate::error::RepositoryError;

/// Persists the status and update timestamp of an invoice
#[async_trait]
pub trait UpdateStatus: Send + Sync {
    /// # Returns
    /// * `Ok(())` - The stored invoice now carries `invoice.status`
    /// * `Err(RepositoryError::InvoiceNotFound)` - No row was updated
    /// * `Err` - An error if the query could not be executed
    async fn update_status(&self, invoice: &Invoice) -> Result<(), RepositoryError>;
}

use async_trait::async_trait;
use payment_gateway_api::Invoice;
use uuid::Uuid;

use crate::error::RepositoryError;

/// Lists the invoices of one account, oldest first
#[async_trait]
pub trait FindByAccountId: Send + Sync {
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Invoice>, RepositoryError>;
}

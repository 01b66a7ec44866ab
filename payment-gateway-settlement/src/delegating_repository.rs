use async_trait::async_trait;
use payment_gateway_api::{Invoice, PaymentRequest, SettlementProvider};
use payment_gateway_db::repository::{FindByAccountId, FindById, Save, UpdateStatus};
use payment_gateway_db::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

/// Invoice repository whose only supported operation is creation, which is
/// handed to a settlement provider. Nothing is stored locally.
pub struct RemoteDelegatingInvoiceRepository {
    provider: Arc<dyn SettlementProvider>,
}

impl RemoteDelegatingInvoiceRepository {
    pub fn new(provider: Arc<dyn SettlementProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Save<Invoice> for RemoteDelegatingInvoiceRepository {
    async fn save(&self, item: &Invoice) -> Result<(), RepositoryError> {
        let response = self
            .provider
            .create_payment(PaymentRequest::for_invoice(item))
            .await?;
        tracing::info!(invoice_id = %item.id, remote_id = %response.id, "invoice delegated to remote provider");
        Ok(())
    }
}

#[async_trait]
impl FindById<Invoice> for RemoteDelegatingInvoiceRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Invoice>, RepositoryError> {
        Err(RepositoryError::NotImplemented("find_by_id"))
    }
}

#[async_trait]
impl FindByAccountId for RemoteDelegatingInvoiceRepository {
    async fn find_by_account_id(&self, _account_id: Uuid) -> Result<Vec<Invoice>, RepositoryError> {
        Err(RepositoryError::NotImplemented("find_by_account_id"))
    }
}

#[async_trait]
impl UpdateStatus for RemoteDelegatingInvoiceRepository {
    async fn update_status(&self, _invoice: &Invoice) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotImplemented("update_status"))
    }
}

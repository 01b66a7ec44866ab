use async_trait::async_trait;
use parking_lot::RwLock;
use payment_gateway_api::Invoice;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::repository::{FindByAccountId, FindById, Save, UpdateStatus};

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
    invoices: RwLock<HashMap<Uuid, Invoice>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.invoices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Save<Invoice> for InMemoryInvoiceRepository {
    async fn save(&self, item: &Invoice) -> Result<(), RepositoryError> {
        let mut invoices = self.invoices.write();
        if invoices.contains_key(&item.id) {
            return Err(RepositoryError::Conflict("id"));
        }
        invoices.insert(item.id, item.clone());
        Ok(())
    }
}

#[async_trait]
impl FindById<Invoice> for InMemoryInvoiceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, RepositoryError> {
        Ok(self
            .invoices
            .read()
            .get(&id)
            .filter(|invoice| invoice.deleted_at.is_none())
            .cloned())
    }
}

#[async_trait]
impl FindByAccountId for InMemoryInvoiceRepository {
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Invoice>, RepositoryError> {
        let mut found: Vec<Invoice> = self
            .invoices
            .read()
            .values()
            .filter(|invoice| invoice.account_id == account_id && invoice.deleted_at.is_none())
            .cloned()
            .collect();
        found.sort_by_key(|invoice| invoice.created_at);
        Ok(found)
    }
}

#[async_trait]
impl UpdateStatus for InMemoryInvoiceRepository {
    async fn update_status(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        let mut invoices = self.invoices.write();
        let stored = invoices
            .get_mut(&invoice.id)
            .ok_or(RepositoryError::InvoiceNotFound(invoice.id))?;
        stored.status = invoice.status;
        stored.updated_at = invoice.updated_at;
        Ok(())
    }
}

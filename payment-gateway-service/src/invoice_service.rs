use payment_gateway_api::{
    CreateInvoiceInput, GatewayError, GatewayResult, Invoice, InvoiceOutput, PaymentRequest,
    SettlementProvider,
};
use payment_gateway_db::repository::{
    AccountRepository, FindByAccountId, FindByApiKey, FindById, InvoiceRepository, Save,
    UpdateStatus,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Where invoices are stored and how they settle.
pub enum InvoiceBackend {
    /// Stored locally and decided in process right after the write.
    Local {
        repository: Arc<dyn InvoiceRepository>,
        provider: Arc<dyn SettlementProvider>,
    },
    /// Creation is delegated to a remote bank; the invoice stays pending until
    /// the bank settles it out of band.
    Remote { repository: Arc<dyn InvoiceRepository> },
}

impl InvoiceBackend {
    fn repository(&self) -> &Arc<dyn InvoiceRepository> {
        match self {
            InvoiceBackend::Local { repository, .. } => repository,
            InvoiceBackend::Remote { repository } => repository,
        }
    }
}

pub struct InvoiceService {
    accounts: Arc<dyn AccountRepository>,
    backend: InvoiceBackend,
}

impl InvoiceService {
    pub fn new(accounts: Arc<dyn AccountRepository>, backend: InvoiceBackend) -> Self {
        Self { accounts, backend }
    }

    /// Creates an invoice for the account holding `input.api_key`.
    ///
    /// The input is validated before the account is looked up.
    pub async fn create(&self, input: CreateInvoiceInput) -> GatewayResult<InvoiceOutput> {
        let mut invoice = input.to_invoice(Uuid::nil())?;
        invoice.account_id = self.account_id_for(&input.api_key).await?;
        self.store_and_settle(invoice).await
    }

    /// Validates and builds the invoice, then stores and settles it through the
    /// configured backend.
    ///
    /// Validation failures return before any repository or provider call.
    pub async fn create_invoice(
        &self,
        input: CreateInvoiceInput,
        account_id: Uuid,
    ) -> GatewayResult<InvoiceOutput> {
        let invoice = input.to_invoice(account_id)?;
        self.store_and_settle(invoice).await
    }

    #[instrument(skip(self, invoice), fields(invoice_id = %invoice.id, amount = %invoice.amount, payment_type = %invoice.payment_type))]
    async fn store_and_settle(&self, mut invoice: Invoice) -> GatewayResult<InvoiceOutput> {
        match &self.backend {
            InvoiceBackend::Local { repository, provider } => {
                repository.save(&invoice).await?;

                let response = provider
                    .create_payment(PaymentRequest::for_invoice(&invoice))
                    .await?;
                if let Some(status) = response.status.terminal_status() {
                    invoice.update_status(status)?;
                    repository.update_status(&invoice).await?;
                }
                tracing::info!(status = %invoice.status, "invoice settled locally");
            }
            InvoiceBackend::Remote { repository } => {
                repository.save(&invoice).await?;
                tracing::info!("invoice issued remotely");
            }
        }

        Ok(InvoiceOutput::from(&invoice))
    }

    pub async fn find_by_id(&self, id: Uuid) -> GatewayResult<InvoiceOutput> {
        let invoice = self.load(id).await?;
        Ok(InvoiceOutput::from(&invoice))
    }

    pub async fn find_by_account_id(&self, account_id: Uuid) -> GatewayResult<Vec<InvoiceOutput>> {
        let invoices = self
            .backend
            .repository()
            .find_by_account_id(account_id)
            .await?;
        Ok(invoices.iter().map(InvoiceOutput::from).collect())
    }

    /// Looks up an invoice on behalf of the account holding `api_key`.
    ///
    /// An invoice owned by another account is reported as not found.
    pub async fn find_by_id_for_api_key(&self, id: Uuid, api_key: &str) -> GatewayResult<InvoiceOutput> {
        let account_id = self.account_id_for(api_key).await?;
        let invoice = self.load(id).await?;
        if invoice.account_id != account_id {
            return Err(GatewayError::InvoiceNotFound);
        }
        Ok(InvoiceOutput::from(&invoice))
    }

    pub async fn list_by_api_key(&self, api_key: &str) -> GatewayResult<Vec<InvoiceOutput>> {
        let account_id = self.account_id_for(api_key).await?;
        self.find_by_account_id(account_id).await
    }

    async fn load(&self, id: Uuid) -> GatewayResult<Invoice> {
        self.backend
            .repository()
            .find_by_id(id)
            .await?
            .ok_or(GatewayError::InvoiceNotFound)
    }

    async fn account_id_for(&self, api_key: &str) -> GatewayResult<Uuid> {
        self.accounts
            .find_by_api_key(api_key)
            .await?
            .map(|account| account.id)
            .ok_or(GatewayError::AccountNotFound)
    }
}

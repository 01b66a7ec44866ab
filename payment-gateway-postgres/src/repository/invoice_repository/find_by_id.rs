use async_trait::async_trait;
use payment_gateway_api::Invoice;
use payment_gateway_db::repository::FindById;
use payment_gateway_db::RepositoryError;
use uuid::Uuid;

use super::repo_impl::{InvoiceRepositoryImpl, SELECT_INVOICE_WITH_PAYER};
use crate::utils::decode_row;

impl InvoiceRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &InvoiceRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<Invoice>, RepositoryError> {
        let query = format!("{SELECT_INVOICE_WITH_PAYER} WHERE i.id = $1 AND i.deleted_at IS NULL");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(repo.pool.as_ref())
            .await?;

        row.as_ref().map(decode_row).transpose()
    }
}

#[async_trait]
impl FindById<Invoice> for InvoiceRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, RepositoryError> {
        Self::find_by_id_impl(self, id).await
    }
}

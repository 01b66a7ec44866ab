use async_trait::async_trait;
use payment_gateway_api::Invoice;
use payment_gateway_db::repository::UpdateStatus;
use payment_gateway_db::RepositoryError;

use super::repo_impl::InvoiceRepositoryImpl;

impl InvoiceRepositoryImpl {
    pub(super) async fn update_status_impl(
        repo: &InvoiceRepositoryImpl,
        invoice: &Invoice,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET status = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(invoice.status.as_str())
        .bind(invoice.updated_at)
        .bind(invoice.id)
        .execute(repo.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::InvoiceNotFound(invoice.id));
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateStatus for InvoiceRepositoryImpl {
    async fn update_status(&self, invoice: &Invoice) -> Result<(), RepositoryError> {
        Self::update_status_impl(self, invoice).await
    }
}

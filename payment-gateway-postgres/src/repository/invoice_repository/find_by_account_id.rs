use async_trait::async_trait;
use payment_gateway_api::Invoice;
use payment_gateway_db::repository::FindByAccountId;
use payment_gateway_db::RepositoryError;
use uuid::Uuid;

use super::repo_impl::{InvoiceRepositoryImpl, SELECT_INVOICE_WITH_PAYER};
use crate::utils::decode_row;

impl InvoiceRepositoryImpl {
    pub(super) async fn find_by_account_id_impl(
        repo: &InvoiceRepositoryImpl,
        account_id: Uuid,
    ) -> Result<Vec<Invoice>, RepositoryError> {
        let query = format!(
            "{SELECT_INVOICE_WITH_PAYER} WHERE i.account_id = $1 AND i.deleted_at IS NULL ORDER BY i.created_at ASC"
        );
        let rows = sqlx::query(&query)
            .bind(account_id)
            .fetch_all(repo.pool.as_ref())
            .await?;

        rows.iter().map(decode_row).collect()
    }
}

#[async_trait]
impl FindByAccountId for InvoiceRepositoryImpl {
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Invoice>, RepositoryError> {
        Self::find_by_account_id_impl(self, account_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{create_test_boleto_invoice, create_test_card_invoice};
    use crate::repository::account_repository::test_utils::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use chrono::Duration;
    use payment_gateway_db::repository::{FindByAccountId, Save};
    use rust_decimal_macros::dec;
    use serial_test::serial;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_account_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let owner = create_test_account("Lister");
        let other = create_test_account("Other");
        ctx.account_repository().save(&owner).await?;
        ctx.account_repository().save(&other).await?;

        let mut first = create_test_boleto_invoice(owner.id, dec!(10));
        first.created_at -= Duration::seconds(30);
        let second = create_test_card_invoice(owner.id, dec!(20));
        let foreign = create_test_card_invoice(other.id, dec!(30));

        ctx.invoice_repository().save(&second).await?;
        ctx.invoice_repository().save(&foreign).await?;
        ctx.invoice_repository().save(&first).await?;

        let listed = ctx.invoice_repository().find_by_account_id(owner.id).await?;
        let ids: Vec<_> = listed.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(listed[0].payer.is_some());
        assert!(listed[1].payer.is_none());

        Ok(())
    }
}

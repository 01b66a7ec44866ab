use async_trait::async_trait;
use payment_gateway_api::Account;
use payment_gateway_db::repository::FindById;
use payment_gateway_db::RepositoryError;
use uuid::Uuid;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::decode_row;

impl AccountRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &AccountRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, api_key, balance, created_at, updated_at, deleted_at
            FROM accounts
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(repo.pool.as_ref())
        .await?;

        row.as_ref().map(decode_row).transpose()
    }
}

#[async_trait]
impl FindById<Account> for AccountRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepositoryError> {
        Self::find_by_id_impl(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use payment_gateway_db::repository::{FindById, Save};
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id_returns_existing_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = ctx.account_repository();

        let account = create_test_account("Existing");
        account_repo.save(&account).await?;

        let found = account_repo.find_by_id(account.id).await?;
        assert_eq!(found.map(|a| a.id), Some(account.id));

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id_missing_is_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = ctx.account_repository();

        assert!(account_repo.find_by_id(Uuid::new_v4()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_id_skips_soft_deleted() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = ctx.account_repository();

        let mut account = create_test_account("Deleted");
        account.deleted_at = Some(Utc::now());
        account_repo.save(&account).await?;

        assert!(account_repo.find_by_id(account.id).await?.is_none());

        Ok(())
    }
}

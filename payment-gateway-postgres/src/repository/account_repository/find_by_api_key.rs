use async_trait::async_trait;
use payment_gateway_api::Account;
use payment_gateway_db::repository::FindByApiKey;
use payment_gateway_db::RepositoryError;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::decode_row;

impl AccountRepositoryImpl {
    pub(super) async fn find_by_api_key_impl(
        repo: &AccountRepositoryImpl,
        api_key: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, api_key, balance, created_at, updated_at, deleted_at
            FROM accounts
            WHERE api_key = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(api_key)
        .fetch_optional(repo.pool.as_ref())
        .await?;

        row.as_ref().map(decode_row).transpose()
    }
}

#[async_trait]
impl FindByApiKey for AccountRepositoryImpl {
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Account>, RepositoryError> {
        Self::find_by_api_key_impl(self, api_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use payment_gateway_db::repository::{FindByApiKey, Save};
    use serial_test::serial;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_find_by_api_key() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let account_repo = ctx.account_repository();

        let account = create_test_account("Keyed");
        account_repo.save(&account).await?;

        let found = account_repo.find_by_api_key(&account.api_key).await?;
        assert_eq!(found.map(|a| a.id), Some(account.id));

        let missing = account_repo.find_by_api_key("0000000000000000").await?;
        assert!(missing.is_none());

        Ok(())
    }
}

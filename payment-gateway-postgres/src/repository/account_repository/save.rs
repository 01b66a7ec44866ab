use async_trait::async_trait;
use payment_gateway_api::Account;
use payment_gateway_db::repository::Save;
use payment_gateway_db::RepositoryError;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::map_unique_violation;

impl AccountRepositoryImpl {
    pub(super) async fn save_impl(
        repo: &AccountRepositoryImpl,
        item: &Account,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, api_key, balance, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.email)
        .bind(&item.api_key)
        .bind(item.balance)
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(item.deleted_at)
        .execute(repo.pool.as_ref())
        .await
        .map_err(|e| map_unique_violation(e, "api_key"))?;

        Ok(())
    }
}

#[async_trait]
impl Save<Account> for AccountRepositoryImpl {
    async fn save(&self, item: &Account) -> Result<(), RepositoryError> {
        Self::save_impl(self, item).await
    }
}

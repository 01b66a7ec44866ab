use async_trait::async_trait;
use chrono::Utc;
use payment_gateway_api::Account;
use payment_gateway_db::repository::UpdateBalance;
use payment_gateway_db::RepositoryError;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::repo_impl::AccountRepositoryImpl;
use crate::utils::decode_row;

impl AccountRepositoryImpl {
    /// Applies the delta to the stored balance in a single row-locking
    /// `UPDATE` and decodes the row as the database stored it.
    pub(super) async fn update_balance_impl(
        repo: &AccountRepositoryImpl,
        account_id: Uuid,
        amount: Decimal,
    ) -> Result<Account, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE accounts
            SET balance = balance + $1, updated_at = $2
            WHERE id = $3 AND deleted_at IS NULL
            RETURNING id, name, email, api_key, balance, created_at, updated_at, deleted_at
            "#,
        )
        .bind(amount)
        .bind(Utc::now())
        .bind(account_id)
        .fetch_optional(&*repo.pool)
        .await?;

        let account: Account = match row {
            Some(row) => decode_row(&row)?,
            None => return Err(RepositoryError::AccountNotFound(account_id)),
        };

        tracing::debug!(account_id = %account.id, delta = %amount, balance = %account.balance, "balance updated");
        Ok(account)
    }
}

#[async_trait]
impl UpdateBalance for AccountRepositoryImpl {
    async fn update_balance(&self, account_id: Uuid, amount: Decimal) -> Result<Account, RepositoryError> {
        Self::update_balance_impl(self, account_id, amount).await
    }
}

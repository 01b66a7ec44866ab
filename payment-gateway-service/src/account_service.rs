use payment_gateway_api::{
    validate_cents, AccountOutput, CreateAccountInput, GatewayError, GatewayResult,
};
use payment_gateway_db::repository::{AccountRepository, FindByApiKey, FindById, Save, UpdateBalance};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Creates an account with a fresh API key.
    ///
    /// The key is checked against existing accounts before anything is written;
    /// a collision yields [`GatewayError::DuplicateApiKey`] and no write.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_account(&self, input: CreateAccountInput) -> GatewayResult<AccountOutput> {
        let account = input.to_account();

        if self.repository.find_by_api_key(&account.api_key).await?.is_some() {
            tracing::warn!("generated api key already in use");
            return Err(GatewayError::DuplicateApiKey);
        }

        self.repository.save(&account).await?;
        tracing::info!(account_id = %account.id, "account created");

        Ok(AccountOutput::from(&account))
    }

    pub async fn find_by_api_key(&self, api_key: &str) -> GatewayResult<AccountOutput> {
        let account = self
            .repository
            .find_by_api_key(api_key)
            .await?
            .ok_or(GatewayError::AccountNotFound)?;
        Ok(AccountOutput::from(&account))
    }

    pub async fn find_by_id(&self, id: Uuid) -> GatewayResult<AccountOutput> {
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(GatewayError::AccountNotFound)?;
        Ok(AccountOutput::from(&account))
    }

    /// Adds `amount` (negative for a debit) to the balance of the account
    /// holding `api_key`. Fractions of a cent are rejected before any lookup.
    #[instrument(skip(self, api_key))]
    pub async fn update_balance(&self, api_key: &str, amount: Decimal) -> GatewayResult<AccountOutput> {
        validate_cents(amount)?;

        let account = self
            .repository
            .find_by_api_key(api_key)
            .await?
            .ok_or(GatewayError::AccountNotFound)?;

        let updated = self.repository.update_balance(account.id, amount).await?;
        tracing::info!(account_id = %updated.id, balance = %updated.balance, "balance updated");

        Ok(AccountOutput::from(&updated))
    }
}

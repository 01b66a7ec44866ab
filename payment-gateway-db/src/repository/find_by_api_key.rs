use async_trait::async_trait;
use payment_gateway_api::Account;

use crate::error::RepositoryError;

/// Lookup of an account by its API key
#[async_trait]
pub trait FindByApiKey: Send + Sync {
    /// # Returns
    /// * `Ok(Some(Account))` - The active account holding this key
    /// * `Ok(None)` - No active account holds this key
    /// * `Err` - An error if the query could not be executed
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Account>, RepositoryError>;
}

use async_trait::async_trait;
use payment_gateway_api::Account;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::RepositoryError;

/// Atomic balance adjustment
///
/// Implementations must lock the account for the whole read-compute-write
/// sequence and apply `amount` to the balance they read under that lock, so
/// that concurrent adjustments of the same account never lose a delta.
#[async_trait]
pub trait UpdateBalance: Send + Sync {
    /// Apply `balance += amount` to the account and return its refreshed state
    ///
    /// # Returns
    /// * `Ok(Account)` - The account after the adjustment
    /// * `Err(RepositoryError::AccountNotFound)` - No active account with this id
    /// * `Err` - An error if the transaction could not be executed
    async fn update_balance(&self, account_id: Uuid, amount: Decimal) -> Result<Account, RepositoryError>;
}

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for persisting a newly created entity
///
/// Implementations that write several rows (an invoice and its payer) do so
/// atomically.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Save<T: Identifiable + Sync>: Send + Sync {
    /// Persist a new entity
    ///
    /// # Returns
    /// * `Ok(())` - The entity was stored
    /// * `Err(RepositoryError::Conflict)` - A uniqueness constraint rejected it
    /// * `Err` - Any other storage or delegation failure
    async fn save(&self, item: &T) -> Result<(), RepositoryError>;
}

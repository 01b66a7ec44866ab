use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding entities by their ID
///
/// Returns an Option so that "no row" is kept apart from storage failures;
/// callers translate `None` into the domain-level not-found error.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl FindById<Invoice> for PostgresInvoiceRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, RepositoryError> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist or was soft-deleted
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError>;
}

use payment_gateway_api::{Account, Invoice};
use uuid::Uuid;

/// Trait for entities that can be uniquely identified by a UUID
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Uuid;
}

impl Identifiable for Account {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for Invoice {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

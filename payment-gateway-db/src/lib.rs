pub mod error;
pub mod in_memory;
pub mod models;
pub mod repository;

pub use error::*;
pub use models::*;
pub use repository::*;

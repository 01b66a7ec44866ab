//! In-process repositories.
//!
//! Used by the service tests and by deployments that run without PostgreSQL.
//! Every account lives behind its own lock in an arena keyed by id, so balance
//! updates to one account are serialized without blocking the others.

pub mod account_repository;
pub mod invoice_repository;

pub use account_repository::InMemoryAccountRepository;
pub use invoice_repository::InMemoryInvoiceRepository;

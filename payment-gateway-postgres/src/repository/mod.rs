pub mod account_repository;
pub mod invoice_repository;
pub mod schema;

pub use account_repository::AccountRepositoryImpl;
pub use invoice_repository::InvoiceRepositoryImpl;

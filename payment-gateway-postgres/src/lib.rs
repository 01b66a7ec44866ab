pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::account_repository::AccountRepositoryImpl;
pub use repository::invoice_repository::InvoiceRepositoryImpl;
pub use repository::schema::migrate;

#[cfg(test)]
pub mod test_helper;

pub mod repo_impl;
pub mod find_by_account_id;
pub mod find_by_id;
pub mod save;
pub mod update_status;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::InvoiceRepositoryImpl;

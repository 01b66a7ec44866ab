pub mod repo_impl;
pub mod find_by_api_key;
pub mod find_by_id;
pub mod save;
pub mod update_balance;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AccountRepositoryImpl;

pub mod find_by_account_id;
pub mod find_by_api_key;
pub mod find_by_id;
pub mod save;
pub mod update_balance;
pub mod update_status;

// Re-exports
pub use find_by_account_id::*;
pub use find_by_api_key::*;
pub use find_by_id::*;
pub use save::*;
pub use update_balance::*;
pub use update_status::*;

use payment_gateway_api::{Account, Invoice};

/// Everything the account service needs from storage.
pub trait AccountRepository:
    Save<Account> + FindById<Account> + FindByApiKey + UpdateBalance
{
}

impl<T> AccountRepository for T where
    T: Save<Account> + FindById<Account> + FindByApiKey + UpdateBalance
{
}

/// Everything the invoice service needs from storage.
pub trait InvoiceRepository:
    Save<Invoice> + FindById<Invoice> + FindByAccountId + UpdateStatus
{
}

impl<T> InvoiceRepository for T where
    T: Save<Invoice> + FindById<Invoice> + FindByAccountId + UpdateStatus
{
}

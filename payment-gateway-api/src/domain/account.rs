use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes behind an API key (hex encoded to 32 characters).
pub const API_KEY_BYTES: usize = 16;

/// A merchant account.
///
/// The balance is only ever changed through [`Account::add_balance`]. Callers that
/// share an account across tasks must serialize that call per account id; the
/// repositories do this with a per-entry lock (in memory) or a row lock
/// (PostgreSQL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub api_key: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            api_key: generate_api_key(),
            balance: Decimal::ZERO,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Applies `balance += amount`. Negative amounts debit the account; there is no
    /// floor at zero.
    pub fn add_balance(&mut self, amount: Decimal) {
        self.balance += amount;
        self.updated_at = Utc::now();
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new("Acme", "billing@acme.test");

        assert_eq!(account.name, "Acme");
        assert_eq!(account.email, "billing@acme.test");
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.api_key.len(), 32);
        assert!(account.api_key.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(account.deleted_at.is_none());
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_new_accounts_are_unique() {
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        for i in 0..200 {
            let account = Account::new(format!("merchant-{i}"), format!("m{i}@shop.test"));
            assert!(ids.insert(account.id));
            assert!(keys.insert(account.api_key));
        }
    }

    #[test]
    fn test_add_balance_credit_and_debit() {
        let mut account = Account::new("Acme", "billing@acme.test");
        let before = account.updated_at;

        account.add_balance(dec!(150.25));
        account.add_balance(dec!(-50.25));

        assert_eq!(account.balance, dec!(100.00));
        assert!(account.updated_at >= before);
    }

    #[test]
    fn test_debit_below_zero_is_allowed() {
        let mut account = Account::new("Acme", "billing@acme.test");
        account.add_balance(dec!(-10));
        assert_eq!(account.balance, dec!(-10));
    }
}

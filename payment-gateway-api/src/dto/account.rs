use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBalanceInput {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountOutput {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub api_key: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountOutput {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            api_key: account.api_key.clone(),
            balance: account.balance,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

impl CreateAccountInput {
    pub fn to_account(&self) -> Account {
        Account::new(self.name.clone(), self.email.clone())
    }
}

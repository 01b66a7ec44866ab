use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use payment_gateway_api::Account;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::repository::{FindByApiKey, FindById, Save, UpdateBalance};

#[derive(Default)]
struct Arena {
    accounts: HashMap<Uuid, Arc<Mutex<Account>>>,
    api_keys: HashMap<String, Uuid>,
}

#[derive(Default)]
pub struct InMemoryAccountRepository {
    arena: RwLock<Arena>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arena.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: Uuid) -> Option<Arc<Mutex<Account>>> {
        self.arena.read().accounts.get(&id).cloned()
    }

    fn snapshot(entry: &Mutex<Account>) -> Option<Account> {
        let account = entry.lock();
        (!account.is_deleted()).then(|| account.clone())
    }
}

#[async_trait]
impl Save<Account> for InMemoryAccountRepository {
    async fn save(&self, item: &Account) -> Result<(), RepositoryError> {
        let mut arena = self.arena.write();
        if arena.api_keys.contains_key(&item.api_key) {
            return Err(RepositoryError::Conflict("api_key"));
        }
        arena.api_keys.insert(item.api_key.clone(), item.id);
        arena
            .accounts
            .insert(item.id, Arc::new(Mutex::new(item.clone())));
        Ok(())
    }
}

#[async_trait]
impl FindById<Account> for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepositoryError> {
        Ok(self.entry(id).and_then(|entry| Self::snapshot(&entry)))
    }
}

#[async_trait]
impl FindByApiKey for InMemoryAccountRepository {
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Account>, RepositoryError> {
        let entry = {
            let arena = self.arena.read();
            arena
                .api_keys
                .get(api_key)
                .and_then(|id| arena.accounts.get(id).cloned())
        };
        Ok(entry.and_then(|entry| Self::snapshot(&entry)))
    }
}

#[async_trait]
impl UpdateBalance for InMemoryAccountRepository {
    async fn update_balance(&self, account_id: Uuid, amount: Decimal) -> Result<Account, RepositoryError> {
        let entry = self
            .entry(account_id)
            .ok_or(RepositoryError::AccountNotFound(account_id))?;

        let mut account = entry.lock();
        if account.is_deleted() {
            return Err(RepositoryError::AccountNotFound(account_id));
        }
        account.add_balance(amount);
        Ok(account.clone())
    }
}

//! In-Memory Stores
//!
//! Volatile implementations of the store traits, for tests and
//! throwaway sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::traits::{AccountStore, ItemStore};
use crate::domain::{Account, DomainError, DomainResult, Entity, GroceryItem, UserId};

#[derive(Default)]
pub struct MemoryItemStore {
    items: Mutex<HashMap<UserId, Vec<GroceryItem>>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn load_items(&self, user_id: &str) -> DomainResult<Vec<GroceryItem>> {
        let items = self.items.lock().await;
        Ok(items.get(user_id).cloned().unwrap_or_default())
    }

    async fn save_items(&self, user_id: &str, items: &[GroceryItem]) -> DomainResult<()> {
        self.items
            .lock()
            .await
            .insert(user_id.to_string(), items.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: &Account) -> DomainResult<Account> {
        let mut accounts = self.accounts.lock().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::Conflict(format!(
                "Email already registered: {}",
                account.email
            )));
        }
        accounts.push(account.clone());
        Ok(account.clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|a| a.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> DomainResult<Account> {
        let mut accounts = self.accounts.lock().await;
        let account = accounts
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("Account {}", id)))?;
        account.name = name.to_string();
        account.phone = phone.map(str::to_string);
        Ok(account.clone())
    }
}

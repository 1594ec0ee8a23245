//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{Account, DomainResult, GroceryItem};

/// Per-user item collection store
///
/// Collections are read and written whole; order is preserved.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Load a user's items, empty when the user has none
    async fn load_items(&self, user_id: &str) -> DomainResult<Vec<GroceryItem>>;

    /// Replace a user's items
    async fn save_items(&self, user_id: &str, items: &[GroceryItem]) -> DomainResult<()>;
}

/// Registered account lookup
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Store a new account; an email already in use is a conflict
    async fn insert(&self, account: &Account) -> DomainResult<Account>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>>;

    /// Update the editable profile fields
    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> DomainResult<Account>;
}

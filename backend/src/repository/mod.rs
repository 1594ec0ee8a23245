//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod item_repo;
mod account_repo;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::{AccountStore, ItemStore};
pub use db::{init_db, DbState};
pub use item_repo::ItemRepository;
pub use account_repo::AccountRepository;
pub use memory::{MemoryAccountStore, MemoryItemStore};

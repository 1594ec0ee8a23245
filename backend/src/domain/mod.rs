//! Domain Layer
//!
//! Contains all domain entities and the pure freshness, notification and
//! impact rules. Nothing here touches storage.

mod entity;
mod category;
mod item;
mod account;
mod session;
mod freshness;
mod notification;
mod impact;
mod inventory;

pub use entity::{Entity, DomainError, DomainResult};
pub use category::Category;
pub use item::{GroceryItem, ItemDraft, ItemId};
pub use account::{Account, AccountProfile, UserId};
pub use session::Session;
pub use freshness::{classify, days_until_expiry, FreshnessStatus};
pub use notification::{generate_notifications, Notification, Severity, DEFAULT_NOTIFICATION_WINDOW_DAYS};
pub use impact::{aggregate_impact, ImpactCoefficients, ImpactMetrics};
pub use inventory::{
    category_labels, partition_expired, CategoryFilter, InventoryAlerts, InventoryEntry, ALL_CATEGORIES,
};

//! Inventory Views
//!
//! Category filtering, expiry alerts and bulk clearing over an item snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::freshness::{days_until_expiry, FreshnessStatus};
use super::item::GroceryItem;

/// Label of the catch-all filter entry
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(l) if l.eq_ignore_ascii_case(ALL_CATEGORIES) => CategoryFilter::All,
            Some(l) => CategoryFilter::Only(Category::from_label(l)),
        }
    }

    /// Labels compare case-insensitively, custom ones included
    pub fn matches(&self, item: &GroceryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item
                .category
                .as_str()
                .eq_ignore_ascii_case(category.as_str()),
        }
    }
}

/// "All" followed by the distinct categories present, in first-seen order
pub fn category_labels(items: &[GroceryItem]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        let label = item.category.as_str();
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

/// An item together with its evaluated freshness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub item: GroceryItem,
    pub days_until_expiry: i64,
    pub status: FreshnessStatus,
}

impl InventoryEntry {
    pub fn evaluate(item: GroceryItem, now: DateTime<Utc>) -> Self {
        let days = days_until_expiry(item.expiry_date, now);
        Self {
            item,
            days_until_expiry: days,
            status: FreshnessStatus::from_days(days),
        }
    }
}

/// Counts shown above the inventory list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryAlerts {
    pub expired: usize,
    /// Expiring within the notification window, today included
    pub expiring: usize,
}

impl InventoryAlerts {
    /// `window_days` is the notification lookahead
    pub fn from_entries(entries: &[InventoryEntry], window_days: i64) -> Self {
        entries.iter().fold(Self::default(), |mut alerts, entry| {
            match entry.days_until_expiry {
                d if d < 0 => alerts.expired += 1,
                d if d <= window_days => alerts.expiring += 1,
                _ => {}
            }
            alerts
        })
    }

    pub fn is_empty(&self) -> bool {
        self.expired == 0 && self.expiring == 0
    }
}

/// Split into (kept, expired), preserving order in both halves
pub fn partition_expired(
    items: Vec<GroceryItem>,
    now: DateTime<Utc>,
) -> (Vec<GroceryItem>, Vec<GroceryItem>) {
    items
        .into_iter()
        .partition(|item| days_until_expiry(item.expiry_date, now) >= 0)
}

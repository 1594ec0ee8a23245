//! Expiry Notifications
//!
//! Notifications are derived from items on every view and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::freshness::days_until_expiry;
use super::item::{GroceryItem, ItemId};

/// Items expiring within this many days (inclusive) raise a notification
pub const DEFAULT_NOTIFICATION_WINDOW_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub item_id: ItemId,
    pub item_name: String,
    /// Negative once the item has expired
    pub days_until_expiry: i64,
    pub message: String,
    pub severity: Severity,
    /// The evaluation instant the notification was generated for
    pub created_at: DateTime<Utc>,
}

/// Generate notifications for expired items and items expiring within `window_days`.
///
/// Sorted most urgent first; items with the same day count keep their input order.
pub fn generate_notifications(
    items: &[GroceryItem],
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<Notification> {
    let mut notifications: Vec<Notification> = items
        .iter()
        .filter_map(|item| {
            let days = days_until_expiry(item.expiry_date, now);
            let severity = match days {
                d if d <= 0 => Severity::Critical,
                d if d <= window_days => Severity::Warning,
                _ => return None,
            };
            Some(Notification {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                days_until_expiry: days,
                message: expiry_message(days),
                severity,
                created_at: now,
            })
        })
        .collect();

    notifications.sort_by_key(|n| n.days_until_expiry);
    notifications
}

fn expiry_message(days: i64) -> String {
    match days {
        d if d < 0 => "This item has expired".to_string(),
        0 => "Expires today!".to_string(),
        1 => "Expires in 1 day".to_string(),
        d => format!("Expires in {} days", d),
    }
}

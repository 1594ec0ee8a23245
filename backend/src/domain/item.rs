//! Grocery Item Entity
//!
//! A tracked grocery unit. Items are never edited in place: they are
//! created, then removed individually or by "clear expired".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::entity::Entity;

/// Opaque item identifier
pub type ItemId = String;

/// A grocery item with an expiry date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Calendar date, no time component
    pub expiry_date: NaiveDate,
    /// Always at least 1
    pub quantity: u32,
}

impl GroceryItem {
    /// Create an item with a freshly generated id
    pub fn new(name: String, category: Category, expiry_date: NaiveDate, quantity: u32) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, category, expiry_date, quantity)
    }

    pub fn with_id(
        id: ItemId,
        name: String,
        category: Category,
        expiry_date: NaiveDate,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name,
            category,
            expiry_date,
            quantity: quantity.max(1),
        }
    }

    pub fn from_draft(draft: ItemDraft) -> Self {
        Self::new(draft.name, draft.category, draft.expiry_date, draft.quantity)
    }
}

impl Entity for GroceryItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// An item awaiting storage: typed into the form, transcribed or scanned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub expiry_date: NaiveDate,
    pub quantity: u32,
}

impl ItemDraft {
    pub fn new(name: &str, category: Category, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.to_string(),
            category,
            expiry_date,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }
}

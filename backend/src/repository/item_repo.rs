//! Item Repository
//!
//! SQLite-backed per-user item collections. A save replaces the user's
//! rows inside one transaction; `position` keeps the collection order.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::db::not_initialized;
use super::traits::ItemStore;
use crate::domain::{Category, DomainError, DomainResult, GroceryItem};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite implementation of the item store
pub struct ItemRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ItemRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn load_items(&self, user_id: &str) -> DomainResult<Vec<GroceryItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, category, expiry_date, quantity FROM grocery_items WHERE user_id = ? ORDER BY position ASC",
        )?;
        let mut rows = stmt.query(params![user_id])?;

        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(row_to_item(row)?);
        }
        Ok(items)
    }

    async fn save_items(&self, user_id: &str, items: &[GroceryItem]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM grocery_items WHERE user_id = ?", params![user_id])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO grocery_items (id, user_id, name, category, expiry_date, quantity, position) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for (position, item) in items.iter().enumerate() {
                stmt.execute(params![
                    item.id,
                    user_id,
                    item.name,
                    item.category.as_str(),
                    item.expiry_date.format(DATE_FORMAT).to_string(),
                    item.quantity,
                    position as i64,
                ])?;
            }
        }
        tx.commit()?;

        log::debug!("Saved {} items for user {}", items.len(), user_id);
        Ok(())
    }
}

/// Convert a database row to GroceryItem
fn row_to_item(row: &rusqlite::Row) -> DomainResult<GroceryItem> {
    let expiry: String = row.get(3)?;
    let expiry_date = NaiveDate::parse_from_str(&expiry, DATE_FORMAT)
        .map_err(|e| DomainError::Internal(format!("Bad stored expiry date {:?}: {}", expiry, e)))?;

    Ok(GroceryItem::with_id(
        row.get(0)?,
        row.get(1)?,
        Category::from_label(&row.get::<_, String>(2)?),
        expiry_date,
        row.get::<_, u32>(4)?,
    ))
}

//! Item Commands
//!
//! Adding, listing and removing grocery items for the signed-in user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    category_labels, partition_expired, Category, CategoryFilter, DomainError, DomainResult,
    GroceryItem, InventoryAlerts, InventoryEntry, ItemDraft, Session,
};
use crate::AppState;

const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values from the manual entry form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub name: String,
    pub category: Option<String>,
    pub expiry_date: Option<String>,
    pub quantity: Option<i64>,
}

/// Filtered inventory with the category picker and alert counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryView {
    /// Items stored, regardless of the filter
    pub total_items: usize,
    pub entries: Vec<InventoryEntry>,
    pub categories: Vec<String>,
    pub alerts: InventoryAlerts,
}

pub fn parse_expiry_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EXPIRY_DATE_FORMAT).map_err(|_| {
        DomainError::InvalidInput(format!("Invalid expiry date '{}', expected YYYY-MM-DD", raw.trim()))
    })
}

/// Validate a form into a draft. Quantity below 1 becomes 1.
pub fn draft_from_form(form: &ItemForm) -> DomainResult<ItemDraft> {
    let name = form.name.trim();
    let expiry = form
        .expiry_date
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());

    let expiry = match expiry {
        Some(raw) if !name.is_empty() => parse_expiry_date(raw)?,
        _ => {
            return Err(DomainError::InvalidInput(
                "Please fill in item name and expiry date".to_string(),
            ))
        }
    };

    let category = Category::from_label(form.category.as_deref().unwrap_or_default());
    if category.is_custom() {
        log::debug!("Using custom category '{}'", category);
    }
    let quantity = form.quantity.unwrap_or(1).clamp(1, u32::MAX as i64) as u32;

    Ok(ItemDraft::new(name, category, expiry).with_quantity(quantity))
}

/// Append a batch of drafts to the user's inventory
pub async fn save_batch(
    state: &AppState,
    session: &Session,
    drafts: Vec<ItemDraft>,
) -> DomainResult<Vec<GroceryItem>> {
    if drafts.is_empty() {
        return Err(DomainError::InvalidInput("Please add at least one item".to_string()));
    }
    let user_id = session.require_user()?;

    let added: Vec<GroceryItem> = drafts.into_iter().map(GroceryItem::from_draft).collect();
    let mut items = state.items.load_items(user_id).await?;
    items.extend(added.iter().cloned());
    state.items.save_items(user_id, &items).await?;

    log::info!("Saved {} item(s) for {}", added.len(), user_id);
    Ok(added)
}

pub async fn add_item(state: &AppState, session: &Session, form: ItemForm) -> DomainResult<GroceryItem> {
    let draft = draft_from_form(&form)?;
    let mut added = save_batch(state, session, vec![draft]).await?;
    added
        .pop()
        .ok_or_else(|| DomainError::Internal("Saved batch was empty".to_string()))
}

pub async fn list_inventory(
    state: &AppState,
    session: &Session,
    filter: &CategoryFilter,
) -> DomainResult<InventoryView> {
    let user_id = session.require_user()?;
    let items = state.items.load_items(user_id).await?;

    let total_items = items.len();
    let categories = category_labels(&items);
    let entries: Vec<InventoryEntry> = items
        .into_iter()
        .filter(|item| filter.matches(item))
        .map(|item| InventoryEntry::evaluate(item, session.now))
        .collect();
    let alerts = InventoryAlerts::from_entries(&entries, state.config.notification_window_days);

    Ok(InventoryView {
        total_items,
        entries,
        categories,
        alerts,
    })
}

pub async fn remove_item(
    state: &AppState,
    session: &mut Session,
    item_id: &str,
) -> DomainResult<GroceryItem> {
    let user_id = session.require_user()?.clone();
    let mut items = state.items.load_items(&user_id).await?;

    let position = items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| DomainError::NotFound(format!("Item {}", item_id)))?;
    let removed = items.remove(position);
    state.items.save_items(&user_id, &items).await?;

    session.retain_dismissed(items.iter().map(|item| &item.id));
    log::info!("Removed item {} ({})", removed.id, removed.name);
    Ok(removed)
}

/// Remove every expired item; returns what was removed
pub async fn clear_expired(state: &AppState, session: &mut Session) -> DomainResult<Vec<GroceryItem>> {
    let user_id = session.require_user()?.clone();
    let items = state.items.load_items(&user_id).await?;

    let (kept, expired) = partition_expired(items, session.now);
    if !expired.is_empty() {
        state.items.save_items(&user_id, &kept).await?;
        log::info!("Cleared {} expired item(s) for {}", expired.len(), user_id);
    }

    session.retain_dismissed(kept.iter().map(|item| &item.id));
    Ok(expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{draft, now, signed_in, today};
    use crate::domain::FreshnessStatus;

    fn form(name: &str, expiry: Option<&str>) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            category: Some("Dairy".to_string()),
            expiry_date: expiry.map(str::to_string),
            quantity: None,
        }
    }

    #[test]
    fn test_draft_requires_name_and_expiry() {
        let cases = [
            form("", Some("2024-06-20")),
            form("  ", Some("2024-06-20")),
            form("Milk", None),
            form("Milk", Some(" ")),
        ];
        for bad in cases {
            let err = draft_from_form(&bad).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidInput("Please fill in item name and expiry date".to_string())
            );
        }
    }

    #[test]
    fn test_draft_normalizes_fields() {
        let mut f = form("  Milk ", Some("2024-06-20"));
        f.quantity = Some(-4);
        f.category = None;
        let draft = draft_from_form(&f).unwrap();
        assert_eq!(draft.name, "Milk");
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.category, Category::Produce);
        assert_eq!(draft.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = draft_from_form(&form("Milk", Some("20/06/2024"))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_save_batch_appends() {
        let (state, session) = signed_in().await;

        save_batch(&state, &session, vec![draft("Milk", Category::Dairy, 1, 1)]).await.unwrap();
        let added = save_batch(
            &state,
            &session,
            vec![draft("Eggs", Category::Dairy, 7, 12), draft("Bread", Category::Pantry, 3, 1)],
        )
        .await
        .unwrap();
        assert_eq!(added.len(), 2);

        let view = list_inventory(&state, &session, &CategoryFilter::All).await.unwrap();
        let names: Vec<&str> = view.entries.iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Bread"]);
    }

    #[tokio::test]
    async fn test_save_batch_errors() {
        let (state, session) = signed_in().await;
        let err = save_batch(&state, &session, vec![]).await.unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("Please add at least one item".to_string()));

        let anonymous = Session::anonymous(now());
        let err = save_batch(&state, &anonymous, vec![draft("Milk", Category::Dairy, 1, 1)])
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Unauthorized("User not authenticated".to_string()));
    }

    #[tokio::test]
    async fn test_list_inventory_filters_and_counts() {
        let (state, session) = signed_in().await;
        save_batch(
            &state,
            &session,
            vec![
                draft("Milk", Category::Dairy, -1, 1),
                draft("Apples", Category::Produce, 2, 4),
                draft("Cheese", Category::Dairy, 10, 1),
            ],
        )
        .await
        .unwrap();

        let all = list_inventory(&state, &session, &CategoryFilter::All).await.unwrap();
        assert_eq!(all.categories, vec!["All", "Dairy", "Produce"]);
        assert_eq!(all.alerts, InventoryAlerts { expired: 1, expiring: 1 });
        assert_eq!(all.entries[0].status, FreshnessStatus::Expired);
        assert_eq!(all.entries[1].status, FreshnessStatus::ExpiringSoon);
        assert_eq!(all.entries[2].status, FreshnessStatus::Fresh);

        let dairy = list_inventory(&state, &session, &CategoryFilter::from_label(Some("dairy")))
            .await
            .unwrap();
        assert_eq!(dairy.entries.len(), 2);
        assert_eq!(dairy.total_items, 3);
        assert_eq!(dairy.categories, all.categories);
        assert_eq!(dairy.alerts, InventoryAlerts { expired: 1, expiring: 0 });
    }

    #[tokio::test]
    async fn test_alerts_follow_notification_window() {
        let (mut state, session) = signed_in().await;
        state.config.notification_window_days = 5;
        save_batch(&state, &session, vec![draft("Cheese", Category::Dairy, 5, 1)]).await.unwrap();

        let view = list_inventory(&state, &session, &CategoryFilter::All).await.unwrap();
        let notifications = crate::commands::list_notifications(&state, &session).await.unwrap();
        assert_eq!(view.alerts.expiring, 1);
        assert_eq!(notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_custom_category_filter_ignores_case() {
        let (state, session) = signed_in().await;
        save_batch(
            &state,
            &session,
            vec![draft("Saffron", Category::from_label("Spices"), 30, 1)],
        )
        .await
        .unwrap();

        let view = list_inventory(&state, &session, &CategoryFilter::from_label(Some("spices")))
            .await
            .unwrap();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.categories, vec!["All", "Spices"]);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let (state, mut session) = signed_in().await;
        let added = save_batch(
            &state,
            &session,
            vec![draft("Milk", Category::Dairy, 1, 1), draft("Eggs", Category::Dairy, 1, 1)],
        )
        .await
        .unwrap();
        session.dismiss(&added[0].id);
        session.dismiss(&added[1].id);

        let removed = remove_item(&state, &mut session, &added[0].id).await.unwrap();
        assert_eq!(removed.name, "Milk");
        assert!(!session.is_dismissed(&added[0].id));
        assert!(session.is_dismissed(&added[1].id));

        let err = remove_item(&state, &mut session, &added[0].id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_clear_expired() {
        let (state, mut session) = signed_in().await;
        save_batch(
            &state,
            &session,
            vec![
                draft("Old", Category::Dairy, -3, 1),
                draft("Today", Category::Dairy, 0, 1),
                draft("Stale", Category::Pantry, -1, 1),
            ],
        )
        .await
        .unwrap();

        let removed = clear_expired(&state, &mut session).await.unwrap();
        let names: Vec<&str> = removed.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Old", "Stale"]);

        let view = list_inventory(&state, &session, &CategoryFilter::All).await.unwrap();
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].item.expiry_date, today());

        assert!(clear_expired(&state, &mut session).await.unwrap().is_empty());
    }
}

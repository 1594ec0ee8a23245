//! Notification Commands
//!
//! Notifications are regenerated from the inventory on every call. Dismissal
//! hides a notification for this session without touching the item.

use crate::domain::{generate_notifications, DomainResult, Notification, Session};
use crate::AppState;

/// All notifications for the current inventory, dismissed ones included
async fn all_notifications(state: &AppState, session: &Session) -> DomainResult<Vec<Notification>> {
    let user_id = session.require_user()?;
    let items = state.items.load_items(user_id).await?;
    Ok(generate_notifications(
        &items,
        session.now,
        state.config.notification_window_days,
    ))
}

/// Visible notifications, most urgent first
pub async fn list_notifications(state: &AppState, session: &Session) -> DomainResult<Vec<Notification>> {
    let mut notifications = all_notifications(state, session).await?;
    notifications.retain(|n| !session.is_dismissed(&n.item_id));
    Ok(notifications)
}

/// Returns false when the notification was already hidden
pub fn dismiss_notification(session: &mut Session, item_id: &str) -> bool {
    session.dismiss(item_id)
}

/// Dismiss everything currently visible; returns how many were hidden
pub async fn clear_notifications(state: &AppState, session: &mut Session) -> DomainResult<usize> {
    let visible = list_notifications(state, session).await?;
    for notification in &visible {
        session.dismiss(&notification.item_id);
    }
    log::info!("Cleared {} notification(s)", visible.len());
    Ok(visible.len())
}

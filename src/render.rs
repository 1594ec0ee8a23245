//! Terminal rendering
//!
//! Every renderer returns a `String` so output can be checked without a terminal.

use colored::{ColoredString, Colorize};
use std::fmt::Write;

use grocery_tracker_lib::commands::InventoryView;
use grocery_tracker_lib::domain::{
    AccountProfile, FreshnessStatus, GroceryItem, ImpactMetrics, ItemDraft, Notification, Severity,
};
use rolling_logger::LogLine;

fn status_icon(status: FreshnessStatus) -> &'static str {
    match status {
        FreshnessStatus::Expired | FreshnessStatus::ExpiringSoon => "⚠",
        FreshnessStatus::UseSoon => "⏰",
        FreshnessStatus::Fresh => "✓",
    }
}

pub fn status_badge(status: FreshnessStatus) -> ColoredString {
    let text = format!("{} {}", status_icon(status), status.label());
    match status {
        FreshnessStatus::Expired => text.red().bold(),
        FreshnessStatus::ExpiringSoon => text.bright_yellow().bold(),
        FreshnessStatus::UseSoon => text.yellow(),
        FreshnessStatus::Fresh => text.green(),
    }
}

fn days_phrase(days: i64) -> String {
    match days {
        d if d < -1 => format!("expired {} days ago", -d),
        -1 => "expired 1 day ago".to_string(),
        0 => "expires today".to_string(),
        1 => "expires in 1 day".to_string(),
        d => format!("expires in {} days", d),
    }
}

pub fn inventory(view: &InventoryView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} items stored", view.total_items);
    let _ = writeln!(out, "{} {}", "Categories:".bold(), view.categories.join(" | "));
    if !view.alerts.is_empty() {
        let alerts = format!(
            "{} item(s) expired, {} item(s) expiring soon",
            view.alerts.expired, view.alerts.expiring
        );
        let _ = writeln!(out, "{}", alerts.bright_yellow());
    }

    if view.entries.is_empty() {
        let _ = writeln!(out, "No items yet. Add one with `add`, `scan` or `voice`.");
        return out;
    }

    for entry in &view.entries {
        let item = &entry.item;
        let _ = writeln!(
            out,
            "{}  {} x{} [{}] {} ({})  {}",
            status_badge(entry.status),
            item.name.bold(),
            item.quantity,
            item.category,
            item.expiry_date.format("%Y-%m-%d"),
            days_phrase(entry.days_until_expiry),
            item.id.dimmed()
        );
    }
    out
}

pub fn drafts(drafts: &[ItemDraft]) -> String {
    let mut out = String::new();
    for draft in drafts {
        let _ = writeln!(
            out,
            "  {} x{} [{}] expires {}",
            draft.name.bold(),
            draft.quantity,
            draft.category,
            draft.expiry_date.format("%Y-%m-%d")
        );
    }
    out
}

pub fn saved(items: &[GroceryItem]) -> String {
    let mut out = format!("{}\n", format!("Saved {} item(s)", items.len()).green());
    for item in items {
        let _ = writeln!(out, "  {} {}", item.name, item.id.dimmed());
    }
    out
}

pub fn notification(notification: &Notification) -> String {
    let severity = match notification.severity {
        Severity::Critical => notification.severity.as_str().to_uppercase().red().bold(),
        Severity::Warning => notification.severity.as_str().to_uppercase().bright_yellow(),
    };
    format!(
        "[{}] {}: {}  {}",
        severity,
        notification.item_name.bold(),
        notification.message,
        notification.item_id.dimmed()
    )
}

pub fn notifications(list: &[Notification]) -> String {
    if list.is_empty() {
        return "No notifications\n".to_string();
    }
    let mut out = format!("{} notification(s)\n", list.len());
    for n in list {
        let _ = writeln!(out, "{}", notification(n));
    }
    out
}

pub fn dashboard(metrics: &ImpactMetrics) -> String {
    let mut out = format!("{}\n", "Your Impact".bold().green());
    let _ = writeln!(out, "  Food waste prevented  {:.1} kg", metrics.food_waste_prevented_kg);
    let _ = writeln!(out, "  CO2 saved             {:.1} kg", metrics.co2_saved_kg);
    let _ = writeln!(out, "  Equivalent car drive  {:.1} km", metrics.car_km_equivalent);
    let _ = writeln!(out, "  Money saved           ${:.2}", metrics.money_saved_usd);
    let _ = writeln!(out, "  Projected yearly      ${:.2}", metrics.projected_yearly_savings_usd);
    let _ = writeln!(out, "  Items tracked         {}", metrics.items_tracked);
    out
}

pub fn profile(profile: &AccountProfile) -> String {
    let mut out = format!("{} <{}>\n", profile.name.bold(), profile.email);
    if let Some(phone) = &profile.phone {
        let _ = writeln!(out, "  phone: {}", phone);
    }
    let _ = writeln!(out, "  member since {}", profile.created_at.format("%Y-%m-%d"));
    out
}

pub fn log_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{} {}\n", line.at.format("%H:%M:%S"), line.text))
        .collect()
}

//! Shared fixtures for command tests

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::commands::{signup, SignupForm};
use crate::config::TrackerConfig;
use crate::domain::{Category, ItemDraft, Session};
use crate::AppState;

/// Fixed evaluation instant: 2024-06-15 10:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
}

pub fn today() -> NaiveDate {
    now().date_naive()
}

pub fn state() -> AppState {
    let config = TrackerConfig {
        scan_delay_ms: 0,
        voice_delay_ms: 0,
        ..TrackerConfig::default()
    };
    AppState::in_memory(config)
}

pub fn signup_form(email: &str) -> SignupForm {
    SignupForm {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
    }
}

/// A state with one registered, signed-in user
pub async fn signed_in() -> (AppState, Session) {
    let state = state();
    let mut session = Session::anonymous(now());
    signup(&state, &mut session, signup_form("user@example.com"))
        .await
        .expect("signup failed");
    (state, session)
}

pub fn draft(name: &str, category: Category, days: i64, quantity: u32) -> ItemDraft {
    ItemDraft::new(name, category, today() + Duration::days(days)).with_quantity(quantity)
}

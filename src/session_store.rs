//! Session persistence between CLI invocations
//!
//! The session file holds the signed-in user id and dismissed notifications.
//! The evaluation clock is never stored.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use grocery_tracker_lib::domain::Session;

pub fn load(path: &Path, now: DateTime<Utc>) -> Result<Session> {
    if !path.exists() {
        return Ok(Session::anonymous(now));
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    let mut session: Session = match serde_json::from_str(&raw) {
        Ok(session) => session,
        Err(e) => {
            let _ = rolling_logger::warn(&format!(
                "Discarding unreadable session file {}: {}",
                path.display(),
                e
            ));
            Session::anonymous(now)
        }
    };
    session.now = now;
    Ok(session)
}

pub fn save(path: &Path, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write session file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_missing_file_is_anonymous() {
        let dir = tempdir().unwrap();
        let session = load(&dir.path().join("session.json"), now()).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.now, now());
    }

    #[test]
    fn test_save_then_load_restores_user() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::signed_in("u1".into(), Utc::now());
        session.dismiss("item-1");
        save(&path, &session).unwrap();

        let loaded = load(&path, now()).unwrap();
        assert_eq!(loaded.user_id.as_deref(), Some("u1"));
        assert!(loaded.is_dismissed("item-1"));
        assert_eq!(loaded.now, now());
    }

    #[test]
    fn test_corrupt_file_starts_over() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = load(&path, now()).unwrap();
        assert!(!session.is_authenticated());
    }
}

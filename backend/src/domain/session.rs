//! Session Context
//!
//! Explicit per-call context: who is signed in, the evaluation instant, and
//! which notifications were dismissed locally.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::UserId;
use super::entity::{DomainError, DomainResult};
use super::item::ItemId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Option<UserId>,
    /// Not persisted; every invocation evaluates against its own clock
    #[serde(skip, default = "Utc::now")]
    pub now: DateTime<Utc>,
    /// Item ids whose notifications were dismissed; the items themselves stay
    #[serde(default)]
    pub dismissed: BTreeSet<ItemId>,
}

impl Session {
    pub fn anonymous(now: DateTime<Utc>) -> Self {
        Self {
            user_id: None,
            now,
            dismissed: BTreeSet::new(),
        }
    }

    pub fn signed_in(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::anonymous(now)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn require_user(&self) -> DomainResult<&UserId> {
        self.user_id
            .as_ref()
            .ok_or_else(|| DomainError::Unauthorized("User not authenticated".to_string()))
    }

    /// Replace the signed-in user; dismissals belong to the previous user and are dropped
    pub fn sign_in(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
        self.dismissed.clear();
    }

    pub fn sign_out(&mut self) {
        self.user_id = None;
        self.dismissed.clear();
    }

    pub fn dismiss(&mut self, item_id: &str) -> bool {
        self.dismissed.insert(item_id.to_string())
    }

    pub fn is_dismissed(&self, item_id: &str) -> bool {
        self.dismissed.contains(item_id)
    }

    /// Drop dismissals for items that no longer exist
    pub fn retain_dismissed<'a>(&mut self, live_ids: impl IntoIterator<Item = &'a ItemId>) {
        let live: BTreeSet<&ItemId> = live_ids.into_iter().collect();
        self.dismissed.retain(|id| live.contains(id));
    }
}

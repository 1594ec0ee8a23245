//! Account Repository
//!
//! SQLite-backed account registry.

use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::db::not_initialized;
use super::traits::AccountStore;
use crate::domain::{Account, DomainError, DomainResult};

const SELECT_ACCOUNT: &str =
    "SELECT id, name, email, phone, password_hash, created_at FROM accounts";

/// SQLite implementation of the account store
pub struct AccountRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl AccountRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    async fn find_one(&self, clause: &str, value: &str) -> DomainResult<Option<Account>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn.prepare(&format!("{} WHERE {} = ?", SELECT_ACCOUNT, clause))?;
        let row = stmt
            .query_row(params![value], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, i64>(5)?,
                ))
            })
            .optional()?;

        row.map(|(id, name, email, phone, password_hash, created_at)| {
            let created_at = DateTime::from_timestamp_millis(created_at)
                .ok_or_else(|| DomainError::Internal(format!("Bad stored timestamp {}", created_at)))?;
            Ok(Account {
                id,
                name,
                email,
                phone,
                password_hash,
                created_at,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn insert(&self, account: &Account) -> DomainResult<Account> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.execute(
            "INSERT INTO accounts (id, name, email, phone, password_hash, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                account.id,
                account.name,
                account.email,
                account.phone,
                account.password_hash,
                account.created_at.timestamp_millis(),
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _) if err.code == ErrorCode::ConstraintViolation => {
                DomainError::Conflict(format!("Email already registered: {}", account.email))
            }
            other => other.into(),
        })?;

        Ok(account.clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Account>> {
        self.find_one("id", id).await
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        self.find_one("email", email).await
    }

    async fn update_profile(&self, id: &str, name: &str, phone: Option<&str>) -> DomainResult<Account> {
        {
            let guard = self.conn.lock().await;
            let conn = guard.as_ref().ok_or_else(not_initialized)?;

            let changed = conn.execute(
                "UPDATE accounts SET name = ?, phone = ? WHERE id = ?",
                params![name, phone, id],
            )?;
            if changed == 0 {
                return Err(DomainError::NotFound(format!("Account {}", id)));
            }
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Account {}", id)))
    }
}

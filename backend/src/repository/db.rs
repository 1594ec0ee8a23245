//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
#[derive(Clone, Default)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle shared with the repositories
    pub fn shared(&self) -> Arc<Mutex<Option<Connection>>> {
        self.conn.clone()
    }

    /// Drop the connection; repositories report "not initialized" afterwards
    pub async fn close(&self) {
        self.conn.lock().await.take();
    }
}

pub(super) fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

/// Initialize database with path (":memory:" for an in-memory database)
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Connection::open(db_path)?
    };

    run_migrations(&conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);

    log::info!("Database ready at {}", db_path.display());
    Ok(state)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )",
        [],
    )?;

    // Profile edits: phone number
    if !column_exists(conn, "accounts", "phone")? {
        conn.execute("ALTER TABLE accounts ADD COLUMN phone TEXT", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add phone: {}", e)))?;
    }

    conn.execute(
        "CREATE TABLE IF NOT EXISTS grocery_items (
            id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            expiry_date TEXT NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 1,
            position INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (user_id, id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_grocery_items_user ON grocery_items(user_id, position)",
        [],
    )?;

    Ok(())
}

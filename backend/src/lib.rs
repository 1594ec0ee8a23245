//! Grocery Tracker Backend
//!
//! Layered architecture:
//! - domain: Core entities and the freshness, notification and impact rules
//! - repository: Data access abstractions and implementations
//! - auth: Credential hashing
//! - capture: Receipt scanning and voice input capabilities
//! - commands: Operations invoked by the front end

use std::sync::Arc;

pub mod auth;
pub mod capture;
pub mod commands;
pub mod config;
pub mod domain;
pub mod repository;

use auth::{Blake3Hasher, CredentialHasher};
use capture::{ReceiptScanner, SimulatedReceiptScanner, SimulatedVoiceTranscriber, VoiceTranscriber};
use config::TrackerConfig;
use domain::DomainResult;
use repository::{
    init_db, AccountRepository, AccountStore, DbState, ItemRepository, ItemStore, MemoryAccountStore,
    MemoryItemStore,
};

/// Application state shared across commands
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub accounts: Arc<dyn AccountStore>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub scanner: Arc<dyn ReceiptScanner>,
    pub transcriber: Arc<dyn VoiceTranscriber>,
    pub config: TrackerConfig,
}

impl AppState {
    /// Open the SQLite database under the configured data directory
    pub async fn open(config: TrackerConfig) -> DomainResult<Self> {
        let db_state: DbState = init_db(&config.db_path()).await?;

        Ok(Self::with_stores(
            config,
            Arc::new(ItemRepository::new(db_state.shared())),
            Arc::new(AccountRepository::new(db_state.shared())),
        ))
    }

    /// Volatile state, nothing touches disk
    pub fn in_memory(config: TrackerConfig) -> Self {
        Self::with_stores(
            config,
            Arc::new(MemoryItemStore::new()),
            Arc::new(MemoryAccountStore::new()),
        )
    }

    pub fn with_stores(
        config: TrackerConfig,
        items: Arc<dyn ItemStore>,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            items,
            accounts,
            hasher: Arc::new(Blake3Hasher),
            scanner: Arc::new(SimulatedReceiptScanner::new(config.scan_delay())),
            transcriber: Arc::new(SimulatedVoiceTranscriber::new(config.voice_delay())),
            config,
        }
    }
}

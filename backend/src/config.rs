//! Tracker Configuration
//!
//! Optional `config.toml` in the data directory. Missing keys take defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{DomainError, DomainResult, ImpactCoefficients, DEFAULT_NOTIFICATION_WINDOW_DAYS};

pub const APP_DIR_NAME: &str = "grocery-tracker";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where the database, logs and session live; set by the loader
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Days ahead (inclusive) that raise an expiry notification
    pub notification_window_days: i64,
    pub impact: ImpactCoefficients,
    pub scan_delay_ms: u64,
    pub voice_delay_ms: u64,
    pub log_max_bytes: u64,
    pub log_max_files: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            notification_window_days: DEFAULT_NOTIFICATION_WINDOW_DAYS,
            impact: ImpactCoefficients::default(),
            scan_delay_ms: 1500,
            voice_delay_ms: 2000,
            log_max_bytes: 1024 * 1024,
            log_max_files: 3,
        }
    }
}

impl TrackerConfig {
    /// Load `config.toml` from `data_dir`, or defaults when the file is absent
    pub fn load(data_dir: &Path) -> DomainResult<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            Self::parse(&raw)
                .map_err(|e| DomainError::InvalidInput(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };
        config.data_dir = data_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.notification_window_days < 0 {
            return Err(DomainError::InvalidInput(
                "notification_window_days must not be negative".to_string(),
            ));
        }
        let impact = &self.impact;
        if [impact.waste_kg_per_item, impact.co2_kg_per_waste_kg, impact.money_usd_per_item]
            .iter()
            .any(|c| !c.is_finite() || *c < 0.0)
        {
            return Err(DomainError::InvalidInput(
                "impact coefficients must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("grocery_tracker.db")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn voice_delay(&self) -> Duration {
        Duration::from_millis(self.voice_delay_ms)
    }
}

/// Platform data directory, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

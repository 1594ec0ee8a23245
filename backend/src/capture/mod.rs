//! Capture Capabilities
//!
//! Receipt scanning and voice input produce item drafts. Real OCR or
//! speech engines plug in behind these traits.

mod simulated;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainResult, ItemDraft};

pub use simulated::{SimulatedReceiptScanner, SimulatedVoiceTranscriber};

/// Reads items off a receipt
#[async_trait]
pub trait ReceiptScanner: Send + Sync {
    /// Expiry dates are estimated relative to `today`
    async fn scan(&self, today: NaiveDate) -> DomainResult<Vec<ItemDraft>>;
}

/// Turns a spoken description into one item draft
#[async_trait]
pub trait VoiceTranscriber: Send + Sync {
    async fn transcribe(&self, today: NaiveDate) -> DomainResult<ItemDraft>;
}

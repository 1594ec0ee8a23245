//! Simulated capture with fixed results after a delay.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, NaiveDate};
use std::time::Duration;

use super::{ReceiptScanner, VoiceTranscriber};
use crate::domain::{Category, DomainResult, ItemDraft};

pub struct SimulatedReceiptScanner {
    delay: Duration,
}

impl SimulatedReceiptScanner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ReceiptScanner for SimulatedReceiptScanner {
    async fn scan(&self, today: NaiveDate) -> DomainResult<Vec<ItemDraft>> {
        tokio::time::sleep(self.delay).await;

        let drafts = vec![
            ItemDraft::new("Milk", Category::Dairy, today + ChronoDuration::days(1)),
            ItemDraft::new("Eggs", Category::Dairy, today + ChronoDuration::days(7)),
            ItemDraft::new("Bread", Category::Pantry, today + ChronoDuration::days(3)),
        ];
        log::info!("Receipt scan detected {} items", drafts.len());
        Ok(drafts)
    }
}

pub struct SimulatedVoiceTranscriber {
    delay: Duration,
}

impl SimulatedVoiceTranscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl VoiceTranscriber for SimulatedVoiceTranscriber {
    async fn transcribe(&self, today: NaiveDate) -> DomainResult<ItemDraft> {
        tokio::time::sleep(self.delay).await;
        log::info!("Voice input captured");
        Ok(ItemDraft::new("Yogurt", Category::Dairy, today + ChronoDuration::days(5)))
    }
}

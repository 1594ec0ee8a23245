//! Capture Commands

use crate::domain::{DomainResult, ItemDraft, Session};
use crate::AppState;

/// Scan a receipt into drafts; nothing is stored until the batch is saved
pub async fn scan_receipt(state: &AppState, session: &Session) -> DomainResult<Vec<ItemDraft>> {
    session.require_user()?;
    let drafts = state.scanner.scan(session.now.date_naive()).await?;
    log::info!("Receipt scan produced {} draft(s)", drafts.len());
    Ok(drafts)
}

pub async fn voice_input(state: &AppState, session: &Session) -> DomainResult<ItemDraft> {
    session.require_user()?;
    let draft = state.transcriber.transcribe(session.now.date_naive()).await?;
    log::info!("Voice input produced draft '{}'", draft.name);
    Ok(draft)
}

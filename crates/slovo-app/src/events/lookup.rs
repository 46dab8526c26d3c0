use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use slovo_core::{LookupTicket, RenderedDocument};
use slovo_dictionary::DictionaryService;
use slovo_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Debounce, fetch and render one lookup, unless cancelled first
pub async fn run_lookup(
    ticket: LookupTicket,
    service: Arc<dyn DictionaryService>,
    lang: String,
    debounce: Duration,
    cancel: CancellationToken,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let document = tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("Lookup #{} for '{}' superseded", ticket.generation(), ticket.query());
            return;
        }
        document = async {
            tokio::time::sleep(debounce).await;
            fetch_document(service.as_ref(), ticket.query(), &lang).await
        } => document,
    };

    // Cancelled while the fetch was finishing
    if cancel.is_cancelled() {
        tracing::debug!("Dropping document #{} for '{}'", ticket.generation(), ticket.query());
        return;
    }

    if let Err(e) = app_to_ui_tx
        .send(AppEvent::ShowDocument { ticket, document })
        .await
    {
        tracing::error!("Failed to send document to UI: {}", e);
    }
}

/// Fetch a query and render the outcome; transport failures become an error document
pub async fn fetch_document(
    service: &dyn DictionaryService,
    query: &str,
    lang: &str,
) -> RenderedDocument {
    match service.lookup(query, lang).await {
        Ok(raw) => slovo_core::build(query, &raw),
        Err(e) => {
            tracing::warn!("Lookup for '{}' failed: {}", query, e);
            RenderedDocument::fetch_failure(e.kind())
        }
    }
}

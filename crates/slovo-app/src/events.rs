use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovo_core::TicketIssuer;
use slovo_dictionary::DictionaryService;
use slovo_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod lookup;

use lookup::run_lookup;

/// App's main loop.
///
/// Keeps at most one lookup alive: every new input cancels the one before it.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    service: Arc<dyn DictionaryService>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut issuer = TicketIssuer::default();
    let mut in_flight: Option<CancellationToken> = None;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::TextInput(query) => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }

                let (lang, debounce) = {
                    let config = state.config.read().await;
                    (config.network.lang.clone(), config.ui.debounce())
                };

                let ticket = issuer.issue(query);
                tracing::debug!("Issued lookup #{} for '{}'", ticket.generation(), ticket.query());

                let token = cancel.child_token();
                in_flight = Some(token.clone());
                tokio::spawn(run_lookup(
                    ticket,
                    Arc::clone(&service),
                    lang,
                    debounce,
                    token,
                    app_to_ui_tx.clone(),
                ));
            }
            AppEvent::ClearInput => {
                if let Some(previous) = in_flight.take() {
                    tracing::debug!("Input cleared, cancelling lookup #{}", issuer.latest());
                    previous.cancel();
                }
            }
            AppEvent::Quit => {
                tracing::info!("Quit requested");
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }
                break;
            }
            AppEvent::ShowDocument { .. } => {
                // UI-only event, ignore in backend
            }
        }
    }

    Ok(())
}

use kanal::{AsyncReceiver, AsyncSender};
use slovo_core::{Preprocessor, QueryPreprocessor, RenderedDocument};
use slovo_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

pub const QUIT_COMMAND: &str = ":q";

/// Printed in place of a document when the input is emptied
pub const CLEARED_MARKER: &str = "(cleared)";

const PROMPT: &str = "Search for a word (empty line clears, :q quits)";

/// Line-oriented display loop.
///
/// Every input line replaces the current query. Documents coming back from
/// the app are shown only while their ticket matches that query.
pub async fn ui_loop<R, W>(
    input: R,
    mut output: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let preprocessor = QueryPreprocessor;
    let mut lines = input.lines();
    let mut live_query = String::new();
    let mut input_open = true;
    // Query sent but its document not shown yet
    let mut awaiting = false;

    output.write_all(format!("{PROMPT}\n").as_bytes()).await?;
    output.flush().await?;

    loop {
        tokio::select! {
            // Input first, so staleness is judged against the newest query
            biased;

            _ = cancel.cancelled() => break,
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) if line.trim() == QUIT_COMMAND => break,
                    Some(line) => {
                        live_query = preprocessor.process(&line);
                        if live_query.is_empty() {
                            awaiting = false;
                            ui_to_app_tx.send(AppEvent::ClearInput).await?;
                            clear_view(&mut output).await?;
                        } else {
                            awaiting = true;
                            ui_to_app_tx.send(AppEvent::TextInput(live_query.clone())).await?;
                        }
                    }
                    None => {
                        tracing::debug!("Input closed");
                        input_open = false;
                        if !awaiting {
                            break;
                        }
                    }
                }
            }
            event = app_to_ui_rx.recv() => {
                if let AppEvent::ShowDocument { ticket, document } = event? {
                    if ticket.is_current(&live_query) {
                        display(&mut output, &document).await?;
                        awaiting = false;
                        if !input_open {
                            break;
                        }
                    } else {
                        tracing::debug!(
                            "Discarding stale document for '{}' (live query '{}')",
                            ticket.query(),
                            live_query
                        );
                    }
                }
            }
        }
    }

    if !cancel.is_cancelled() {
        if let Err(e) = ui_to_app_tx.send(AppEvent::Quit).await {
            tracing::warn!("Failed to notify app of quit: {}", e);
        }
    }

    Ok(())
}

pub async fn display<W>(output: &mut W, document: &RenderedDocument) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("\n{}\n", document.to_markdown()).as_bytes())
        .await?;
    output.flush().await?;
    Ok(())
}

pub async fn clear_view<W>(output: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("\n{CLEARED_MARKER}\n").as_bytes())
        .await?;
    output.flush().await?;
    Ok(())
}

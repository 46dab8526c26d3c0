use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use slovo_core::{Preprocessor, QueryPreprocessor};
use slovo_dictionary::DictionaryService;
use slovo_lang_russian::OpenRussianClient;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod settings;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::lookup::fetch_document;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "slovo", about = "Russian-English dictionary lookup")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the default config to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
    /// Look up a single word, print it and exit
    #[arg(long)]
    once: Option<String>,
    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // stdout carries documents, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = cli.write_config {
        return settings::write_default_config(&path);
    }

    let config = settings::load_config(cli.config.as_deref())?;
    let service: Arc<dyn DictionaryService> =
        Arc::new(OpenRussianClient::from_config(&config.network)?);
    tracing::info!(
        "Using {} at {}",
        service.metadata().name,
        service.metadata().base_url
    );

    if let Some(word) = cli.once {
        let query = QueryPreprocessor.process(&word);
        if query.is_empty() {
            anyhow::bail!("Nothing to look up");
        }

        let document = fetch_document(service.as_ref(), &query, &config.network.lang).await;
        println!("{document}");
        return Ok(());
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(service);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
            // The stdin reader may still be parked on a read
            std::process::exit(0);
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Err(e)) => tracing::error!("task failed: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
            Ok(Ok(())) => {}
        }
    }

    Ok(())
}

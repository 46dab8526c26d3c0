use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use slovo_config::Config;

/// Load config from a JSON file if given, then apply environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    config.apply_env();
    Ok(config)
}

/// Write the default config as pretty JSON, refusing to overwrite
pub fn write_default_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    fs::write(path, serde_json::to_string_pretty(&Config::default())?)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}

use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod network;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `SLOVO_API_URL`, `SLOVO_LANG`, `TIMEOUT_SECONDS` and `DEBOUNCE_MS`
    pub fn apply_env(&mut self) {
        if let Ok(api_url) = env::var("SLOVO_API_URL") {
            self.network.api_url = api_url;
        }

        if let Ok(lang) = env::var("SLOVO_LANG") {
            self.network.lang = lang;
        }

        if let Some(timeout_seconds) = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.network.timeout_seconds = timeout_seconds;
        }

        if let Some(debounce_ms) = env::var("DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.ui.debounce_ms = debounce_ms;
        }
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.openrussian.org/suggestions".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Dictionary API access
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Language of the translations requested from the API
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            lang: default_lang(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

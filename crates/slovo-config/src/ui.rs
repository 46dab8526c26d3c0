use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_debounce_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Quiet period after the last keystroke before a lookup is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

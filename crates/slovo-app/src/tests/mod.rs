mod lookup_flow_tests;

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use slovo_config::Config;
use slovo_dictionary::{DictionaryService, FetchError, LanguageCode, ProviderMetadata};

/// In-memory dictionary; unknown queries time out
pub(crate) struct FakeDictionary {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
    delay: Duration,
}

impl FakeDictionary {
    pub(crate) fn new(delay: Duration) -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            "стол".to_string(),
            json!({
                "result": {
                    "term": "стол",
                    "words": [{ "word": { "type": "noun", "ru": "сто'л", "tls2": [{ "translation": ["table"] }] } }]
                }
            }),
        );

        Self {
            responses,
            calls: Mutex::new(Vec::new()),
            delay,
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DictionaryService for FakeDictionary {
    async fn lookup(&self, query: &str, _lang: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(query.to_string());
        tokio::time::sleep(self.delay).await;
        self.responses.get(query).cloned().ok_or(FetchError::Timeout)
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![("ru".to_string(), "en".to_string())]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            base_url: "memory://".to_string(),
        }
    }
}

pub(crate) fn test_config(debounce_ms: u64) -> Config {
    let mut config = Config::default();
    config.ui.debounce_ms = debounce_ms;
    config
}

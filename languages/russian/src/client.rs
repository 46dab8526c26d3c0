use std::time::Duration;

use async_trait::async_trait;
use slovo_config::network::NetworkConfig;
use slovo_dictionary::{DictionaryService, FetchError, LanguageCode, ProviderMetadata};

/// Client for the OpenRussian suggestions endpoint
#[derive(Clone)]
pub struct OpenRussianClient {
    client: reqwest::Client,
    api_url: String,
}

impl OpenRussianClient {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, FetchError> {
        Self::new(config.api_url.clone(), config.timeout())
    }

    /// Build the GET request for a query without sending it
    pub fn request(&self, query: &str, lang: &str) -> Result<reqwest::Request, FetchError> {
        if !self.supports(lang) {
            return Err(FetchError::UnsupportedLanguage(lang.to_string()));
        }

        let request = self
            .client
            .get(&self.api_url)
            .query(&[("q", query), ("lang", lang)])
            .build()?;

        Ok(request)
    }

    fn supports(&self, lang: &str) -> bool {
        self.supported_languages()
            .iter()
            .any(|(_, to)| to.eq_ignore_ascii_case(lang))
    }
}

#[async_trait]
impl DictionaryService for OpenRussianClient {
    async fn lookup(&self, query: &str, lang: &str) -> Result<serde_json::Value, FetchError> {
        let request = self.request(query, lang)?;
        tracing::debug!("GET {}", request.url());

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Dictionary API answered {status} for '{query}'");
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let json: serde_json::Value = response.json().await?;

        Ok(json)
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        vec![("ru".to_string(), "en".to_string())]
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenRussian".to_string(),
            base_url: self.api_url.clone(),
        }
    }
}

pub type LanguageCode = String;

/// Remote dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Fetch the raw lookup payload for a query, translations in `lang`
    async fn lookup(&self, query: &str, lang: &str) -> Result<serde_json::Value, FetchError>;

    /// Get supported (headword, translation) language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl FetchError {
    /// Short name of the failure, shown to the user
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Timeout => "Timeout",
            FetchError::Network(_) => "Network",
            FetchError::HttpStatus(_) => "HttpStatus",
            FetchError::Decode(_) => "Decode",
            FetchError::UnsupportedLanguage(_) => "UnsupportedLanguage",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::HttpStatus(status.as_u16())
        } else {
            FetchError::Network(e)
        }
    }
}

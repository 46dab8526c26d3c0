use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Composed forms keep й and ё as single characters
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}

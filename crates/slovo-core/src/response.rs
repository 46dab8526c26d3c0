use serde_json::{Map, Value};

use crate::error::ResponseError;

/// Typed view of a dictionary API response.
///
/// Built once from the raw payload; every field here is either guaranteed or
/// explicitly optional, so rendering never has to inspect JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    /// Headword echoed by the service, trimmed and non-empty
    pub term: String,
    /// First word entry, the only one that is rendered
    pub entry: Option<WordEntry>,
    pub sentences: Vec<ExampleSentence>,
}

/// The two observed shapes of an element of `words`
#[derive(Debug, Clone, PartialEq)]
pub enum WordEntry {
    /// `tls2`/`tls` directly on the entry
    Legacy(LegacyEntry),
    /// Nested `word: { type, ru, verb?, tls2 }`
    Rich(RichEntry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyEntry {
    pub meanings: Meanings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RichEntry {
    /// Part of speech tag (`type`)
    pub part_of_speech: String,
    /// Russian form with stress markers (`ru`)
    pub accented: Option<String>,
    pub verb: Option<VerbInfo>,
    pub meanings: Meanings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerbInfo {
    pub aspect: Option<String>,
    /// `accented` form of the first aspect partner
    pub partner: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Meanings {
    /// Structured groups from `tls2`
    Grouped(Vec<MeaningGroup>),
    /// Every string of the legacy `tls` lists, flattened in order
    Flat(Vec<String>),
    Absent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeaningGroup {
    pub translations: Vec<String>,
    pub example: Option<UsageExample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageExample {
    pub native: Option<String>,
    pub translated: Option<String>,
}

/// Sentence pair with both sides trimmed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExampleSentence {
    pub ru: String,
    pub tl: String,
}

impl ExampleSentence {
    pub fn is_empty(&self) -> bool {
        self.ru.is_empty() && self.tl.is_empty()
    }
}

impl LookupResult {
    /// Validate the envelope and convert the payload into typed data
    pub fn from_value(raw: &Value) -> Result<Self, ResponseError> {
        let result = raw
            .as_object()
            .and_then(|root| root.get("result"))
            .and_then(Value::as_object)
            .ok_or(ResponseError::MalformedResponse)?;

        let term = str_field(result, "term").map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(ResponseError::EmptyTerm);
        }

        let entry = array_field(result, "words")
            .first()
            .and_then(WordEntry::from_value);

        let sentences = array_field(result, "sentences")
            .iter()
            .map(ExampleSentence::from_value)
            .collect();

        Ok(Self {
            term: term.to_string(),
            entry,
            sentences,
        })
    }
}

impl WordEntry {
    pub fn meanings(&self) -> &Meanings {
        match self {
            WordEntry::Legacy(entry) => &entry.meanings,
            WordEntry::Rich(entry) => &entry.meanings,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Some(entry) = value.as_object() else {
            tracing::warn!("Skipping word entry that is not an object");
            return None;
        };

        match entry.get("word").and_then(Value::as_object) {
            Some(word) => RichEntry::from_map(word).map(WordEntry::Rich),
            None => Some(WordEntry::Legacy(LegacyEntry {
                meanings: Meanings::from_map(entry),
            })),
        }
    }
}

impl RichEntry {
    fn from_map(word: &Map<String, Value>) -> Option<Self> {
        let Some(part_of_speech) = str_field(word, "type") else {
            tracing::warn!("Word entry has no type, dropping it");
            return None;
        };

        let verb = word.get("verb").and_then(Value::as_object).map(|verb| VerbInfo {
            aspect: str_field(verb, "aspect").map(str::to_string),
            partner: array_field(verb, "partners2")
                .first()
                .and_then(Value::as_object)
                .and_then(|partner| str_field(partner, "accented"))
                .map(str::to_string),
        });

        Some(Self {
            part_of_speech: part_of_speech.to_string(),
            accented: str_field(word, "ru").map(str::to_string),
            verb,
            meanings: Meanings::from_map(word),
        })
    }
}

impl Meanings {
    /// `tls2` wins whenever it has elements, otherwise `tls` is flattened
    fn from_map(entry: &Map<String, Value>) -> Self {
        let grouped = array_field(entry, "tls2");
        if !grouped.is_empty() {
            return Meanings::Grouped(grouped.iter().map(MeaningGroup::from_value).collect());
        }

        let flat: Vec<String> = array_field(entry, "tls")
            .iter()
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(scalar_text)
            .collect();

        if flat.is_empty() {
            Meanings::Absent
        } else {
            Meanings::Flat(flat)
        }
    }
}

impl MeaningGroup {
    fn from_value(value: &Value) -> Self {
        let Some(group) = value.as_object() else {
            return Self::default();
        };

        let translations = array_field(group, "translation")
            .iter()
            .filter_map(scalar_text)
            .collect();

        let example = array_field(group, "examples")
            .first()
            .and_then(Value::as_object)
            .map(|example| UsageExample {
                native: str_field(example, "native").map(str::to_string),
                translated: str_field(example, "translated").map(str::to_string),
            });

        Self {
            translations,
            example,
        }
    }
}

impl ExampleSentence {
    fn from_value(value: &Value) -> Self {
        let Some(sentence) = value.as_object() else {
            return Self::default();
        };

        let side = |key: &str| {
            str_field(sentence, key)
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            ru: side("ru"),
            tl: side("tl"),
        }
    }
}

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn array_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Text of a string, number or bool; other values carry no translation
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

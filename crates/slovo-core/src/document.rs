use std::fmt;

use serde_json::Value;

use crate::accent::annotate;
use crate::error::ResponseError;
use crate::response::{ExampleSentence, LookupResult, MeaningGroup, Meanings, RichEntry, WordEntry};

/// Example sentences shown per lookup
pub const MAX_EXAMPLE_SENTENCES: usize = 6;

const NO_CONTENT: &str = "_No translations or examples available._";

/// One line of the rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Text(String),
    Item { marker: ListMarker, text: String },
    Indented { depth: usize, text: String },
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, used for meanings
    Dash,
    /// `+`, used for example sentences
    Plus,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading { level, text } => {
                write!(f, "{} {}", "#".repeat(usize::from(*level)), text)
            }
            Block::Text(text) => f.write_str(text),
            Block::Item { marker, text } => {
                let marker = match marker {
                    ListMarker::Dash => '-',
                    ListMarker::Plus => '+',
                };
                write!(f, "{marker} {text}")
            }
            Block::Indented { depth, text } => write!(f, "{:width$}{text}", "", width = *depth),
            Block::Blank => Ok(()),
        }
    }
}

/// Markdown-like document produced for a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    blocks: Vec<Block>,
}

impl RenderedDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// `# Error` followed by a single explanatory line
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(vec![heading(1, "Error"), Block::Text(message.into())])
    }

    /// Document shown when the dictionary service could not be reached
    pub fn fetch_failure(kind: &str) -> Self {
        Self::error(format!("Failed to fetch data: {}", code(kind)))
    }

    pub fn from_error(error: &ResponseError) -> Self {
        match error {
            ResponseError::MalformedResponse => Self::error(error.to_string()),
            ResponseError::EmptyTerm => Self::new(vec![heading(1, error.to_string())]),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Turn a raw dictionary API response into a document.
///
/// Never fails: a malformed payload or a missing headword produce their own
/// documents instead of an error.
pub fn build(query: &str, raw: &Value) -> RenderedDocument {
    match LookupResult::from_value(raw) {
        Ok(result) => {
            tracing::debug!(query, term = %result.term, "Rendering lookup result");
            render(&result)
        }
        Err(e) => {
            tracing::debug!(query, "Lookup response rejected: {e}");
            RenderedDocument::from_error(&e)
        }
    }
}

/// Render an already validated result
pub fn render(result: &LookupResult) -> RenderedDocument {
    let mut writer = DocumentWriter::new(headword(result));

    if let Some(WordEntry::Rich(entry)) = &result.entry {
        writer.grammar(entry);
    }

    let meanings_rendered = match result.entry.as_ref().map(WordEntry::meanings) {
        Some(Meanings::Grouped(groups)) => writer.meanings(groups),
        Some(Meanings::Flat(translations)) => {
            writer.translations(translations);
            false
        }
        Some(Meanings::Absent) | None => false,
    };

    writer.sentences(&result.sentences, meanings_rendered);
    writer.finish()
}

/// Rich entries carry a stressed form of the word; otherwise the plain term
fn headword(result: &LookupResult) -> String {
    match &result.entry {
        Some(WordEntry::Rich(RichEntry {
            accented: Some(accented),
            ..
        })) if !accented.trim().is_empty() => annotate(accented.trim()),
        _ => result.term.clone(),
    }
}

struct DocumentWriter {
    blocks: Vec<Block>,
    has_body: bool,
}

impl DocumentWriter {
    fn new(title: String) -> Self {
        Self {
            blocks: vec![heading(1, title), Block::Blank],
            has_body: false,
        }
    }

    fn push_body(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
        self.has_body = true;
    }

    fn grammar(&mut self, entry: &RichEntry) {
        let part_of_speech = Block::Text(entry.part_of_speech.clone());

        match &entry.verb {
            Some(verb) => {
                let mut blocks = Vec::new();
                if let Some(aspect) = &verb.aspect {
                    blocks.push(Block::Text(aspect.clone()));
                }
                blocks.push(part_of_speech);
                if let Some(partner) = &verb.partner {
                    blocks.push(Block::Blank);
                    blocks.push(Block::Text(format!("partner: {}", bold(&annotate(partner)))));
                }
                self.push_body(blocks);
            }
            None => self.push_body([part_of_speech]),
        }
    }

    /// Returns whether a Meanings section was written
    fn meanings(&mut self, groups: &[MeaningGroup]) -> bool {
        let body: Vec<Block> = groups.iter().flat_map(meaning_group).collect();
        if body.is_empty() {
            return false;
        }

        self.push_body([heading(2, "Meanings"), Block::Blank]);
        self.push_body(body);
        self.push_body([Block::Blank]);
        true
    }

    fn translations(&mut self, translations: &[String]) {
        self.push_body([
            heading(2, "English Translations"),
            Block::Blank,
            Block::Text(translations.join(", ")),
            Block::Blank,
        ]);
    }

    fn sentences(&mut self, sentences: &[ExampleSentence], after_meanings: bool) {
        let body: Vec<Block> = sentences
            .iter()
            .take(MAX_EXAMPLE_SENTENCES)
            .filter(|sentence| !sentence.is_empty())
            .flat_map(example_sentence)
            .collect();
        if body.is_empty() {
            return;
        }

        let title = if after_meanings {
            "More Example Sentences"
        } else {
            "Example Sentences"
        };
        self.push_body([heading(2, title), Block::Blank]);
        self.push_body(body);
    }

    fn finish(mut self) -> RenderedDocument {
        if !self.has_body {
            self.blocks.push(Block::Text(NO_CONTENT.to_string()));
        }
        RenderedDocument::new(self.blocks)
    }
}

fn meaning_group(group: &MeaningGroup) -> Vec<Block> {
    let mut blocks = Vec::new();

    if !group.translations.is_empty() {
        blocks.push(Block::Item {
            marker: ListMarker::Dash,
            text: bold(&group.translations.join(", ")),
        });
        blocks.push(Block::Blank);
    }

    if let Some(example) = &group.example {
        if let Some(native) = &example.native {
            blocks.push(Block::Indented {
                depth: 2,
                text: code(&annotate(native)),
            });
        }
        if let Some(translated) = &example.translated {
            blocks.push(Block::Text(emphasis(translated)));
        }
    }

    blocks
}

fn example_sentence(sentence: &ExampleSentence) -> Vec<Block> {
    let mut blocks = Vec::new();

    if !sentence.ru.is_empty() {
        blocks.push(Block::Item {
            marker: ListMarker::Plus,
            text: bold(&annotate(&sentence.ru)),
        });
    }
    if !sentence.tl.is_empty() {
        blocks.push(Block::Blank);
        blocks.push(Block::Indented {
            depth: 3,
            text: sentence.tl.clone(),
        });
    }
    blocks.push(Block::Blank);

    blocks
}

fn heading(level: u8, text: impl Into<String>) -> Block {
    Block::Heading {
        level,
        text: text.into(),
    }
}

fn bold(text: &str) -> String {
    format!("**{text}**")
}

fn emphasis(text: &str) -> String {
    format!("*{text}*")
}

fn code(text: &str) -> String {
    format!("`{text}`")
}

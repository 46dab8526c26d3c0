/// Stress marker used by the dictionary API, written right after the stressed letter
pub const STRESS_MARKER: char = '\'';

/// Combining acute accent (U+0301)
pub const COMBINING_ACUTE: char = '\u{0301}';

/// Convert stress-marker notation into combining-diacritic text.
///
/// Every marker that directly follows a non-marker character is replaced with
/// U+0301, so `Челове'к` becomes `Челове́к`. A marker at the start of the text
/// or right after another marker has nothing to attach to and is kept as-is.
pub fn annotate(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        match (c, prev) {
            (STRESS_MARKER, Some(p)) if p != STRESS_MARKER => out.push(COMBINING_ACUTE),
            _ => out.push(c),
        }
        prev = Some(c);
    }

    out
}


//! Front-matter extraction.
//!
//! The grammar is flat and line-oriented:
//!
//! ```text
//! ---
//! title: A quiet afternoon
//! date: 2024-03-01
//! ---
//! body…
//! ```
//!
//! Keys are bare identifiers, values are the rest of the line with
//! surrounding whitespace trimmed. There are no nested or multi-line values
//! and no quoting rules.

use indexmap::IndexMap;

const BOM: char = '\u{feff}';
const DELIMITER: &str = "---";

/// Flat `key: value` metadata from the head of a document.
///
/// Keys keep their source order so renderers can list them as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: IndexMap<String, String>,
}

impl FrontMatter {
    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a value, treating an empty value as absent.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Insert or replace a value. A replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// The `title` value, or `""`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or_default()
    }

    /// The `date` value, or `""`. Dates compare as strings.
    #[must_use]
    pub fn date(&self) -> &str {
        self.get("date").unwrap_or_default()
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of [`extract`]: the metadata and what is left of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Parsed metadata; empty when the document has no front-matter block.
    pub front_matter: FrontMatter,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

/// Split a document into front-matter and body.
///
/// A leading byte-order mark is dropped. If the first line is not `---`, or
/// the block is never closed, the whole text is the body and the metadata is
/// empty.
#[must_use]
pub fn extract(text: &str) -> Extracted<'_> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let no_front_matter = Extracted {
        front_matter: FrontMatter::default(),
        body: text,
    };

    let (first, mut rest) = split_line(text);
    if first.trim_end() != DELIMITER {
        return no_front_matter;
    }

    let mut front_matter = FrontMatter::default();
    while !rest.is_empty() {
        let (line, next) = split_line(rest);
        if line.trim_end() == DELIMITER {
            return Extracted {
                front_matter,
                body: next,
            };
        }
        if let Some((key, value)) = parse_pair(line) {
            front_matter.insert(key, value);
        }
        rest = next;
    }

    no_front_matter
}

/// Split off the first line, without its terminator.
fn split_line(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((line, rest)) => (line.strip_suffix('\r').unwrap_or(line), rest),
        None => (text, ""),
    }
}

/// Parse `key: value`. Lines that don't fit are ignored by the caller.
fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    is_identifier(key).then(|| (key, value.trim()))
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

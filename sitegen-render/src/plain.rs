//! Plain-text conversion for the narration script.
//!
//! The script format has no rich text, so Markdown syntax is removed rather
//! than rendered.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("valid regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid regex"));
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").expect("valid regex"));
static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*?)\*|\b_([^_]+?)_\b").expect("valid regex"));
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("valid regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Strip Markdown emphasis, links, images, code spans and HTML tags, then
/// collapse whitespace runs to single spaces.
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    let text = CODE_RE.replace_all(text, "$1");
    let text = IMAGE_RE.replace_all(&text, "$1");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = STRONG_RE.replace_all(&text, "$1$2");
    let text = EMPHASIS_RE.replace_all(&text, "$1$2");
    let text = TAG_RE.replace_all(&text, " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Turn a title into a filename stem.
///
/// Whitespace and characters that are unsafe on common filesystems become
/// `_`, runs of `_` collapse, leading and trailing `_` are trimmed. An empty
/// result becomes `untitled`.
#[must_use]
pub fn sanitize_filename(title: &str) -> String {
    let mapped: String = title
        .chars()
        .map(|c| {
            if c.is_whitespace() || c.is_control() || r#"/\:*?"<>|"#.contains(c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let mut slug = String::with_capacity(mapped.len());
    for c in mapped.chars() {
        if c == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(c);
    }

    let slug = slug.trim_matches(|c| c == '_' || c == '.');
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}

//! Inline HTML rendering of text fragments.
//!
//! Every piece of author text that reaches a page goes through
//! [`render_inline`] (or [`escape_html`] for attribute values). It is the
//! only place source Markdown becomes HTML.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("valid regex"));

/// Escape the four HTML-sensitive characters `&`, `<`, `>` and `"`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape, then turn `![alt](src)` into `<img>` and `**bold**` into
/// `<strong>`.
///
/// Substitutions run on the escaped text, so captured groups are already
/// safe to place inside attributes. Bold only applies between images; bold
/// markers inside alt text are dropped.
#[must_use]
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;

    for caps in IMAGE_RE.captures_iter(&escaped) {
        let (Some(whole), Some(alt), Some(src)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        out.push_str(&render_bold(&escaped[last..whole.start()]));
        out.push_str(&format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            src.as_str(),
            alt.as_str().replace("**", "")
        ));
        last = whole.end();
    }

    out.push_str(&render_bold(&escaped[last..]));
    out
}

fn render_bold(escaped: &str) -> std::borrow::Cow<'_, str> {
    BOLD_RE.replace_all(escaped, "<strong>$1</strong>")
}

/// Render multi-line text, joining lines with `<br>`.
#[must_use]
pub fn render_lines(text: &str) -> String {
    text.split('\n')
        .map(render_inline)
        .collect::<Vec<_>>()
        .join("<br>\n")
}

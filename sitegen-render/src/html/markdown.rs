//! Prose Markdown to HTML for diary and review bodies.

use pulldown_cmark::{Options, Parser, html};

/// Render a Markdown body with `CommonMark` plus tables, strikethrough and
/// footnotes.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

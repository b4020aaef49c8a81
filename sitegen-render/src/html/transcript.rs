//! Dialogue transcript page.
//!
//! Documents are listed newest first. Each becomes an `<article>` with a
//! title header, one divider-led `<section>` per heading, and a date footer.

use sitegen_core::{Block, Channel, Document, Section};

use crate::html::page::PageTemplate;
use crate::html::sort_newest_first;
use crate::inline::{escape_html, render_inline, render_lines};
use crate::table::render_table;

/// Render one block.
#[must_use]
pub fn render_block(block: &Block, child_prefix: &str) -> String {
    match block {
        Block::Speech {
            speaker,
            paragraphs,
        } => {
            let channel = Channel::for_speaker(speaker, child_prefix);
            let mut lines = Vec::with_capacity(paragraphs.len() + 2);
            lines.push(format!(
                "<div class=\"speech speech-{}\">",
                channel.as_str()
            ));
            lines.push(format!(
                "<span class=\"speaker\">{}</span>",
                render_inline(speaker)
            ));
            for paragraph in paragraphs {
                lines.push(format!("<p>{}</p>", render_inline(paragraph)));
            }
            lines.push("</div>".to_string());
            lines.join("\n")
        }
        Block::Image { alt, reference } => format!(
            "<figure class=\"dialogue-image\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></figure>",
            escape_html(reference),
            escape_html(alt)
        ),
        Block::Table { rows } => {
            let table = render_table(rows.as_slice());
            if table.is_empty() {
                String::new()
            } else {
                format!("<div class=\"dialogue-table\">\n{table}\n</div>")
            }
        }
        Block::Quote { text } => format!("<blockquote>{}</blockquote>", render_lines(text)),
        Block::Text { text } => format!("<p class=\"narration\">{}</p>", render_lines(text)),
    }
}

/// Render a section: divider, heading (if titled), blocks in order.
#[must_use]
pub fn render_section(section: &Section, child_prefix: &str) -> String {
    let mut lines = Vec::new();
    lines.push("<hr class=\"section-divider\">".to_string());
    lines.push("<section>".to_string());
    if !section.title.is_empty() {
        lines.push(format!("<h3>{}</h3>", render_inline(&section.title)));
    }
    lines.extend(
        section
            .blocks
            .iter()
            .map(|block| render_block(block, child_prefix))
            .filter(|html| !html.is_empty()),
    );
    lines.push("</section>".to_string());
    lines.join("\n")
}

/// Render one document as an `<article>`.
#[must_use]
pub fn render_document(document: &Document, child_prefix: &str) -> String {
    let mut lines = Vec::new();
    lines.push("<article class=\"dialogue\">".to_string());

    lines.push("<header class=\"dialogue-header\">".to_string());
    lines.push(format!("<h2>{}</h2>", render_inline(document.title())));
    if let Some(subtitle) = document.subtitle() {
        lines.push(format!(
            "<p class=\"dialogue-subtitle\">{}</p>",
            render_inline(subtitle)
        ));
    }
    lines.push("</header>".to_string());

    for section in &document.sections {
        lines.push(render_section(section, child_prefix));
    }

    let date = document.date();
    if !date.is_empty() {
        lines.push(format!(
            "<footer class=\"dialogue-date\"><time datetime=\"{}\">{}</time></footer>",
            escape_html(date),
            render_inline(date)
        ));
    }

    lines.push("</article>".to_string());
    lines.join("\n")
}

/// Render the full transcript page, newest document first.
#[must_use]
pub fn render_transcript_page(
    documents: &[Document],
    template: &PageTemplate<'_>,
    child_prefix: &str,
) -> String {
    let mut ordered: Vec<&Document> = documents.iter().collect();
    sort_newest_first(&mut ordered, |doc| doc.date());

    let content = ordered
        .iter()
        .map(|doc| render_document(doc, child_prefix))
        .collect::<Vec<_>>()
        .join("\n");
    template.wrap(&content)
}

//! Diary page.

use sitegen_core::DiaryEntry;

use crate::html::markdown::render_markdown;
use crate::html::page::PageTemplate;
use crate::html::sort_newest_first;
use crate::inline::render_inline;

/// Render one entry as an `<article>` anchored by its date.
#[must_use]
pub fn render_diary_entry(entry: &DiaryEntry) -> String {
    let date = entry.date.format("%Y-%m-%d");
    let mut lines = Vec::new();
    lines.push(format!("<article class=\"diary-entry\" id=\"d-{date}\">"));
    lines.push("<header>".to_string());
    lines.push(format!("<h2>{}</h2>", render_inline(&entry.title)));
    lines.push(format!("<time datetime=\"{date}\">{date}</time>"));
    lines.push("</header>".to_string());
    lines.push(render_markdown(&entry.body).trim_end().to_string());
    lines.push("</article>".to_string());
    lines.join("\n")
}

/// Render the diary page, newest entry first.
#[must_use]
pub fn render_diary_page(entries: &[DiaryEntry], template: &PageTemplate<'_>) -> String {
    let mut ordered: Vec<&DiaryEntry> = entries.iter().collect();
    sort_newest_first(&mut ordered, |entry| entry.date);

    let content = ordered
        .iter()
        .map(|entry| render_diary_entry(entry))
        .collect::<Vec<_>>()
        .join("\n");
    template.wrap(&content)
}

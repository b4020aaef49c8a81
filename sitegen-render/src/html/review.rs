//! Review page.

use sitegen_core::Review;

use crate::html::markdown::render_markdown;
use crate::html::page::PageTemplate;
use crate::html::sort_newest_first;
use crate::inline::{escape_html, render_inline};

/// Render one review: title and date header, a details list of the other
/// metadata keys, then the body.
#[must_use]
pub fn render_review(review: &Review) -> String {
    let mut lines = Vec::new();
    lines.push("<article class=\"review\">".to_string());
    lines.push("<header>".to_string());
    lines.push(format!("<h2>{}</h2>", render_inline(review.title())));
    let date = review.date();
    if !date.is_empty() {
        lines.push(format!(
            "<time datetime=\"{}\">{}</time>",
            escape_html(date),
            render_inline(date)
        ));
    }
    lines.push("</header>".to_string());

    let details: Vec<_> = review.details().collect();
    if !details.is_empty() {
        lines.push("<dl class=\"review-meta\">".to_string());
        for (key, value) in details {
            lines.push(format!(
                "<dt>{}</dt><dd>{}</dd>",
                render_inline(key),
                render_inline(value)
            ));
        }
        lines.push("</dl>".to_string());
    }

    lines.push(render_markdown(&review.body).trim_end().to_string());
    lines.push("</article>".to_string());
    lines.join("\n")
}

/// Render the review page, newest first.
#[must_use]
pub fn render_review_page(reviews: &[Review], template: &PageTemplate<'_>) -> String {
    let mut ordered: Vec<&Review> = reviews.iter().collect();
    sort_newest_first(&mut ordered, |review| review.date());

    let content = ordered
        .iter()
        .map(|review| render_review(review))
        .collect::<Vec<_>>()
        .join("\n");
    template.wrap(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(title: &str, date: &str) -> Review {
        Review::from_source(&format!(
            "---\ntitle: {title}\nbrand: Key\ndate: {date}\nscore: 8\n---\nBody of {title}.\n"
        ))
        .unwrap()
    }

    #[test]
    fn test_review_fragment() {
        let html = render_review(&review("Clannad", "2024-02-01"));
        assert!(html.contains("<h2>Clannad</h2>"));
        assert!(html.contains("<time datetime=\"2024-02-01\">2024-02-01</time>"));
        assert!(html.contains("<dl class=\"review-meta\">\n<dt>brand</dt><dd>Key</dd>\n<dt>score</dt><dd>8</dd>\n</dl>"));
        assert!(html.contains("<p>Body of Clannad.</p>"));
    }

    #[test]
    fn test_review_without_details() {
        let review = Review::from_source("---\ntitle: Bare\n---\ntext").unwrap();
        let html = render_review(&review);
        assert!(!html.contains("review-meta"));
        assert!(!html.contains("<time"));
    }

    #[test]
    fn test_page_newest_first() {
        let reviews = vec![
            review("Alpha", "2024-01-01"),
            review("Gamma", "2024-03-01"),
            review("Beta", "2024-02-01"),
        ];
        let page = render_review_page(&reviews, &PageTemplate::new("Reviews", "s.css", "reviews"));
        let gamma = page.find("<h2>Gamma").unwrap();
        let beta = page.find("<h2>Beta").unwrap();
        let alpha = page.find("<h2>Alpha").unwrap();
        assert!(gamma < beta && beta < alpha);
    }
}

//! The fixed page shell shared by every generated page.

use crate::inline::escape_html;

/// Page-level settings for [`PageTemplate::wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate<'a> {
    /// `<title>` and page heading text.
    pub title: &'a str,
    /// Stylesheet href.
    pub stylesheet: &'a str,
    /// Class on `<main>`, one per page type.
    pub class: &'a str,
    /// Document language.
    pub lang: &'a str,
}

impl<'a> PageTemplate<'a> {
    /// Template with the default language.
    #[must_use]
    pub const fn new(title: &'a str, stylesheet: &'a str, class: &'a str) -> Self {
        Self {
            title,
            stylesheet,
            class,
            lang: "ja",
        }
    }

    /// Wrap rendered content in the page shell.
    #[must_use]
    pub fn wrap(&self, content: &str) -> String {
        let title = escape_html(self.title);
        let mut lines = Vec::new();

        lines.push("<!DOCTYPE html>".to_string());
        lines.push(format!("<html lang=\"{}\">", escape_html(self.lang)));
        lines.push("<head>".to_string());
        lines.push("<meta charset=\"utf-8\">".to_string());
        lines.push(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
        );
        lines.push(format!("<title>{title}</title>"));
        lines.push(format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(self.stylesheet)
        ));
        lines.push("</head>".to_string());
        lines.push("<body>".to_string());
        lines.push("<!-- generated by sitegen; edits will be overwritten -->".to_string());
        lines.push(format!("<h1 class=\"page-title\">{title}</h1>"));
        lines.push(format!("<main class=\"{}\">", escape_html(self.class)));
        lines.push(content.to_string());
        lines.push("</main>".to_string());
        lines.push("<footer class=\"site-footer\">generated by sitegen</footer>".to_string());
        lines.push("</body>".to_string());
        lines.push("</html>".to_string());

        let mut page = lines.join("\n");
        page.push('\n');
        page
    }
}

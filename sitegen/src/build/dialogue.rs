//! Dialogue transcript page build.

use std::path::{Path, PathBuf};

use sitegen_core::Document;
use sitegen_render::html::transcript::render_transcript_page;

use crate::build::{
    BuildReport, Loaded, Target, markdown_files, page_template, read_source, warn_empty,
    write_output,
};
use crate::config::PageTarget;
use crate::error::SitegenError;

/// A parsed dialogue document and the file it came from.
#[derive(Debug, Clone)]
pub struct DialogueSource {
    /// Source path.
    pub path: PathBuf,
    /// Parsed document.
    pub document: Document,
}

impl DialogueSource {
    /// Title for naming outputs: the front-matter title, else the file stem.
    #[must_use]
    pub fn display_title(&self) -> String {
        let title = self.document.title();
        if title.trim().is_empty() {
            self.path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            title.to_string()
        }
    }
}

/// Parse every dialogue document in `dir`. Any Markdown file is a valid
/// document, so nothing is skipped.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if the directory or a file cannot be read.
pub async fn load(dir: &Path) -> Result<Loaded<DialogueSource>, SitegenError> {
    let files = markdown_files(dir).await?;
    let mut loaded = Loaded::new(files.len());

    for path in files {
        let text = read_source(&path).await?;
        let document = Document::parse(&text);
        if document.front_matter.is_empty() {
            tracing::debug!(file = %path.display(), "dialogue has no front-matter");
        }
        tracing::debug!(
            file = %path.display(),
            sections = document.sections.len(),
            "parsed dialogue"
        );
        loaded.items.push(DialogueSource { path, document });
    }

    Ok(loaded)
}

/// Build the dialogue transcript page.
///
/// # Errors
///
/// Returns [`SitegenError::File`] on any read or write failure.
pub async fn build(target: &PageTarget, child_prefix: &str) -> Result<BuildReport, SitegenError> {
    let loaded = load(&target.source).await?;
    let mut report = BuildReport::from_loaded(Target::Dialogue, &loaded);
    if loaded.items.is_empty() {
        warn_empty(Target::Dialogue, &target.source);
        return Ok(report);
    }

    let documents: Vec<Document> = loaded.items.into_iter().map(|s| s.document).collect();
    let html = render_transcript_page(&documents, &page_template(target), child_prefix);
    write_output(&target.output, &html).await?;
    report.written.push(target.output.clone());
    Ok(report)
}

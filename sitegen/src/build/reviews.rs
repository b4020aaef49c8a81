//! Review page build.

use std::path::Path;

use sitegen_core::Review;
use sitegen_render::html::review::render_review_page;

use crate::build::{
    BuildReport, Loaded, Target, markdown_files, page_template, read_source, warn_empty,
    warn_skipped, write_output,
};
use crate::config::PageTarget;
use crate::error::SitegenError;

/// Parse every review in `dir`. Files without a `title` are skipped.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if the directory or a file cannot be read.
pub async fn load(dir: &Path) -> Result<Loaded<Review>, SitegenError> {
    let files = markdown_files(dir).await?;
    let mut loaded = Loaded::new(files.len());

    for path in &files {
        let text = read_source(path).await?;
        match Review::from_source(&text) {
            Ok(review) => {
                tracing::debug!(file = %path.display(), title = review.title(), "parsed review");
                loaded.items.push(review);
            }
            Err(reason) => {
                warn_skipped(path, &reason);
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Build the review page.
///
/// # Errors
///
/// Returns [`SitegenError::File`] on any read or write failure.
pub async fn build(target: &PageTarget) -> Result<BuildReport, SitegenError> {
    let loaded = load(&target.source).await?;
    let mut report = BuildReport::from_loaded(Target::Reviews, &loaded);
    if loaded.items.is_empty() {
        warn_empty(Target::Reviews, &target.source);
        return Ok(report);
    }

    let html = render_review_page(&loaded.items, &page_template(target));
    write_output(&target.output, &html).await?;
    report.written.push(target.output.clone());
    Ok(report)
}

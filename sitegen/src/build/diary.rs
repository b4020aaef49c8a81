//! Diary page build.

use std::path::Path;

use sitegen_core::DiaryEntry;
use sitegen_render::html::diary::render_diary_page;

use crate::build::{
    BuildReport, Loaded, Target, file_name, markdown_files, page_template, read_source,
    warn_empty, warn_skipped, write_output,
};
use crate::config::PageTarget;
use crate::error::SitegenError;

/// Parse every diary file in `dir`. Files whose names are not
/// `YYYY-MM-DD_title.md` with a real date are skipped.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if the directory or a file cannot be read.
pub async fn load(dir: &Path) -> Result<Loaded<DiaryEntry>, SitegenError> {
    let files = markdown_files(dir).await?;
    let mut loaded = Loaded::new(files.len());

    for path in &files {
        let text = read_source(path).await?;
        match DiaryEntry::from_source(&file_name(path), &text) {
            Ok(entry) => {
                tracing::debug!(file = %path.display(), date = %entry.date, "parsed diary entry");
                loaded.items.push(entry);
            }
            Err(reason) => {
                warn_skipped(path, &reason);
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Build the diary page.
///
/// # Errors
///
/// Returns [`SitegenError::File`] on any read or write failure.
pub async fn build(target: &PageTarget) -> Result<BuildReport, SitegenError> {
    let loaded = load(&target.source).await?;
    let mut report = BuildReport::from_loaded(Target::Diary, &loaded);
    if loaded.items.is_empty() {
        warn_empty(Target::Diary, &target.source);
        return Ok(report);
    }

    let html = render_diary_page(&loaded.items, &page_template(target));
    write_output(&target.output, &html).await?;
    report.written.push(target.output.clone());
    Ok(report)
}

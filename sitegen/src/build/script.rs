//! Narration script export.
//!
//! Each run is a clean rebuild: previously generated script files in the
//! output directory are removed before the new set is written. Other files
//! in that directory are left alone.

use std::path::Path;

use sitegen_render::script::{build_script, is_generated_script, script_file_name, to_yaml};

use crate::build::dialogue::{self, DialogueSource};
use crate::build::{BuildReport, Target, file_name, warn_empty, write_output};
use crate::config::ScriptTarget;
use crate::error::SitegenError;

/// Export one script per dialogue document.
///
/// # Errors
///
/// Returns [`SitegenError::File`] on any filesystem failure and
/// [`SitegenError::Render`] if a script cannot be serialized.
pub async fn build(target: &ScriptTarget) -> Result<BuildReport, SitegenError> {
    let loaded = dialogue::load(&target.source).await?;
    let mut report = BuildReport::from_loaded(Target::Script, &loaded);
    if loaded.items.is_empty() {
        warn_empty(Target::Script, &target.source);
        return Ok(report);
    }

    let removed = clean_output(&target.output_dir).await?;
    tracing::info!(dir = %target.output_dir.display(), removed, "cleaned script directory");

    for (index, source) in loaded.items.iter().enumerate() {
        let (name, yaml) = render(index + 1, source, target)?;
        let path = target.output_dir.join(name);
        write_output(&path, &yaml).await?;
        report.written.push(path);
    }

    Ok(report)
}

fn render(
    seq: usize,
    source: &DialogueSource,
    target: &ScriptTarget,
) -> Result<(String, String), SitegenError> {
    let title = source.display_title();
    let script = build_script(&source.document, &target.settings);
    tracing::debug!(
        file = %source.path.display(),
        scenes = script.scenes.len(),
        "built script"
    );
    let yaml = to_yaml(&script, &title)?;
    Ok((script_file_name(seq, &title), yaml))
}

/// Delete generated script files from `dir`, creating it if missing.
/// Returns how many files were removed.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if the directory cannot be created or
/// read, or a file cannot be removed.
pub async fn clean_output(dir: &Path) -> Result<usize, SitegenError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(SitegenError::file("create directory", dir))?;

    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(SitegenError::file("read directory", dir))?;

    let mut removed = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(SitegenError::file("read directory", dir))?
    {
        let path = entry.path();
        if !is_generated_script(&file_name(&path)) {
            continue;
        }
        tokio::fs::remove_file(&path)
            .await
            .map_err(SitegenError::file("remove", &path))?;
        tracing::debug!(file = %path.display(), "removed stale script");
        removed += 1;
    }

    Ok(removed)
}

//! Filesystem pipeline: scan a source directory, parse each file, render,
//! write.
//!
//! Everything is sequential. Per-file problems are logged and the file is
//! skipped; filesystem failures abort the run.

pub mod diary;
pub mod dialogue;
pub mod reviews;
pub mod script;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sitegen_render::html::page::PageTemplate;

use crate::config::PageTarget;
use crate::error::SitegenError;

/// What a loader produced from one source directory.
#[derive(Debug)]
pub struct Loaded<T> {
    /// Successfully parsed items, in filename order.
    pub items: Vec<T>,
    /// Number of Markdown files found.
    pub sources: usize,
    /// Number of files skipped with a warning.
    pub skipped: usize,
}

impl<T> Loaded<T> {
    const fn new(sources: usize) -> Self {
        Self {
            items: Vec::new(),
            sources,
            skipped: 0,
        }
    }
}

/// Build outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Diary page
    Diary,
    /// Review page
    Reviews,
    /// Dialogue transcript page
    Dialogue,
    /// Narration scripts
    Script,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diary => "diary",
            Self::Reviews => "reviews",
            Self::Dialogue => "dialogue",
            Self::Script => "script",
        })
    }
}

/// Outcome of one build or check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Which output.
    pub target: Target,
    /// Markdown files found.
    pub sources: usize,
    /// Files that parsed.
    pub parsed: usize,
    /// Files skipped with a warning.
    pub skipped: usize,
    /// Files written.
    pub written: Vec<PathBuf>,
}

impl BuildReport {
    pub(crate) fn from_loaded<T>(target: Target, loaded: &Loaded<T>) -> Self {
        Self {
            target,
            sources: loaded.sources,
            parsed: loaded.items.len(),
            skipped: loaded.skipped,
            written: Vec::new(),
        }
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} source file(s), {} parsed, {} skipped",
            self.target, self.sources, self.parsed, self.skipped
        )?;
        match self.written.as_slice() {
            [] => Ok(()),
            [one] => write!(f, ", wrote {}", one.display()),
            many => write!(f, ", wrote {} files", many.len()),
        }
    }
}

/// List `.md` files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if the directory cannot be read.
pub async fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SitegenError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(SitegenError::file("read directory", dir))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(SitegenError::file("read directory", dir))?
    {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map_err(SitegenError::file("stat", &path))?
            .is_file();
        if is_file && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "scanned source directory");
    Ok(files)
}

/// Read a source file as UTF-8.
///
/// # Errors
///
/// Returns [`SitegenError::File`] on any read or decoding failure.
pub async fn read_source(path: &Path) -> Result<String, SitegenError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(SitegenError::file("read", path))
}

/// Write a whole output file, creating parent directories.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if a directory or the file cannot be
/// written.
pub async fn write_output(path: &Path, contents: &str) -> Result<(), SitegenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(SitegenError::file("create directory", parent))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(SitegenError::file("write", path))?;
    tracing::info!(output = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Page shell settings for a resolved target.
#[must_use]
pub fn page_template(target: &PageTarget) -> PageTemplate<'_> {
    PageTemplate {
        title: &target.title,
        stylesheet: &target.stylesheet,
        class: target.kind.class(),
        lang: &target.lang,
    }
}

/// File name for log fields and filename grammars.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Log a skipped source file.
pub fn warn_skipped(path: &Path, reason: &impl fmt::Display) {
    tracing::warn!(file = %path.display(), %reason, "skipping source file");
}

/// Log the zero-input case.
pub fn warn_empty(target: Target, dir: &Path) {
    tracing::warn!(%target, dir = %dir.display(), "no usable source files; nothing written");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_markdown_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "notes.txt", "c.markdown"] {
            tokio::fs::write(dir.path().join(name), "x").await.unwrap();
        }
        tokio::fs::create_dir(dir.path().join("sub.md")).await.unwrap();

        let files = markdown_files(dir.path()).await.unwrap();
        let names: Vec<_> = files.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_error() {
        let err = markdown_files(Path::new("/nonexistent/sitegen/src"))
            .await
            .unwrap_err();
        assert!(matches!(err, SitegenError::File { action: "read directory", .. }));
    }

    #[tokio::test]
    async fn test_write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/page.html");
        write_output(&path, "<p>hi</p>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_report_display() {
        let mut report = BuildReport {
            target: Target::Diary,
            sources: 3,
            parsed: 2,
            skipped: 1,
            written: Vec::new(),
        };
        assert_eq!(
            report.to_string(),
            "diary: 3 source file(s), 2 parsed, 1 skipped"
        );
        report.written.push(PathBuf::from("diary.html"));
        assert!(report.to_string().ends_with(", wrote diary.html"));
    }
}

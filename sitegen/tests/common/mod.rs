//! Shared integration-test harness: a throwaway site directory and a way to
//! run the `sitegen` binary inside it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temporary site root. Removed on drop.
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// Creates an empty site.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Site root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a site-relative path.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Writes a file, creating parent directories.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create dirs");
        }
        std::fs::write(&path, contents).expect("failed to write fixture");
        self
    }

    /// Creates an empty directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn mkdir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.path(rel)).expect("failed to create dir");
        self
    }

    /// Reads a file as a string.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Sorted file names in a site directory.
    #[allow(clippy::missing_panics_doc)]
    pub fn list(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(self.path(rel))
            .expect("failed to read dir")
            .map(|e| e.expect("bad dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs `sitegen` with `args` from the site root.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_sitegen"))
            .args(args)
            .current_dir(self.root())
            .env_remove("SITEGEN_LOG_LEVEL")
            .env_remove("SITEGEN_CONFIG")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to spawn sitegen")
    }
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

//! Error types for `sitegen`
//!
//! Per-file problems are not errors: they are logged and the file is
//! skipped. Everything here aborts the run and maps to a process exit code.

use std::path::PathBuf;

use sitegen_render::error::RenderError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `sitegen` runs.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error (render failure, strict check failure)
    pub const ERROR: i32 = 1;

    /// Configuration error (unreadable or invalid config file)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (missing source directory, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for a `sitegen` run.
#[derive(Debug, Error)]
pub enum SitegenError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A filesystem operation on a known path failed
    #[error("failed to {action} {path}: {source}")]
    File {
        /// What was being done (`read`, `write`, …)
        action: &'static str,
        /// The path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// `check --strict` found skipped source files
    #[error("{skipped} source file(s) skipped in strict mode")]
    Strict {
        /// Number of skipped files across all targets
        skipped: usize,
    },
}

impl SitegenError {
    /// Wrap an I/O error with the action and path it came from.
    pub fn file(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::File {
            action,
            path,
            source,
        }
    }

    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::File { .. } => ExitCode::IO_ERROR,
            Self::Render(_) | Self::Strict { .. } => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {path}")]
    MissingFile {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path to the config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", .line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// A key that no setting claims
    #[error("unknown configuration key '{field}'")]
    UnknownKey {
        /// Dotted key path
        field: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Dotted field path
        field: String,
        /// The value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let cases: Vec<(SitegenError, i32)> = vec![
            (
                ConfigError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONFIG_ERROR,
            ),
            (
                SitegenError::file("read", "/x")(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "x",
                )),
                ExitCode::IO_ERROR,
            ),
            (SitegenError::Strict { skipped: 2 }, ExitCode::ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }

    #[test]
    fn test_file_error_message() {
        let err = SitegenError::file("read", "diary/x.md")(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "failed to read diary/x.md: boom");
    }

    #[test]
    fn test_parse_error_with_line() {
        let err = ConfigError::Parse {
            path: PathBuf::from("sitegen.yaml"),
            line: Some(4),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in sitegen.yaml (line 4): bad");
    }
}

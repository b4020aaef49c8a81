//! Per-file problems that skip a source file without failing the build.

use thiserror::Error;

/// Why a source file was left out of a page.
///
/// These are recoverable: the build logs the reason as a warning and moves
/// on to the next file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The filename does not follow `YYYY-MM-DD_<title>.md`.
    #[error("filename '{name}' does not match YYYY-MM-DD_<title>.md")]
    BadFilename {
        /// The offending filename
        name: String,
    },

    /// The filename has the right shape but the date does not exist.
    #[error("'{date}' in filename '{name}' is not a calendar date")]
    InvalidDate {
        /// The offending filename
        name: String,
        /// The date portion as written
        date: String,
    },

    /// A required front-matter key is absent or empty.
    #[error("missing front-matter key '{key}'")]
    MissingKey {
        /// The required key
        key: &'static str,
    },
}

//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while rendering output files.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Script serialization failed.
    #[error("failed to serialize script '{title}': {source}")]
    Script {
        /// Title of the document being exported
        title: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },
}

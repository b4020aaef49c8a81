//! Configuration loader
//!
//! Resolution order:
//! 1. `--config FILE`, which must exist
//! 2. `./sitegen.yaml` when present
//! 3. built-in defaults

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::schema::SiteConfig;
use crate::config::validation::validate;
use crate::error::ConfigError;

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sitegen.yaml";

/// Load, parse and validate the site configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an explicit file is missing, any file
/// cannot be read or parsed, or a value fails validation.
pub async fn load(explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(SiteConfig::default());
            }
            path
        }
    };

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::MissingFile { path: path.clone() },
            _ => ConfigError::Read {
                path: path.clone(),
                source,
            },
        })?;

    let mut config = parse(&text, &path)?;
    config.root = config_root(&path);
    validate(&config)?;

    tracing::info!(config = %path.display(), "loaded configuration");
    Ok(config)
}

/// Parse configuration text. An empty document yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] with the parser's line number when the
/// YAML is malformed or has unknown keys.
pub fn parse(text: &str, path: &Path) -> Result<SiteConfig, ConfigError> {
    if text.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

fn config_root(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

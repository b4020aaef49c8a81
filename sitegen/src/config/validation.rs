//! Configuration validation.
//!
//! Runs after deserialization. Checks values serde accepts but the
//! exporter cannot use.

use crate::config::schema::SiteConfig;
use crate::error::ConfigError;

/// Validate a loaded configuration, reporting the first bad value.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownKey`] for a misspelled `script:` key and
/// [`ConfigError::InvalidValue`] naming the offending field otherwise.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if let Some(key) = config.script.unknown.keys().next() {
        return Err(ConfigError::UnknownKey {
            field: format!("script.{key}"),
        });
    }

    let settings = &config.script.settings;

    if settings.child_prefix.trim().is_empty() {
        return Err(invalid(
            "script.child_prefix",
            &settings.child_prefix,
            "a non-empty speaker-name prefix",
        ));
    }

    for (field, value) in [
        ("script.pause_sec", settings.pause_sec),
        ("script.intro_pause_sec", settings.intro_pause_sec),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(field, &value.to_string(), "a non-negative number of seconds"));
        }
    }

    let video = &settings.video;
    for (field, value) in [
        ("script.video.width", video.width),
        ("script.video.height", video.height),
        ("script.video.fps", video.fps),
    ] {
        if value == 0 {
            return Err(invalid(field, "0", "a positive integer"));
        }
    }

    for (field, voice) in [
        ("script.voice.main.speed", &settings.voice.main),
        ("script.voice.child.speed", &settings.voice.child),
    ] {
        if !voice.speed.is_finite() || voice.speed <= 0.0 {
            return Err(invalid(field, &voice.speed.to_string(), "a positive number"));
        }
    }

    Ok(())
}

fn invalid(field: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

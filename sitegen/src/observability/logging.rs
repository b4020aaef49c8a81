//! Logging setup.
//!
//! The global flags resolve to a [`LogSettings`] before anything is
//! installed. Verbosity raises only the workspace crates; dependencies stay
//! at `warn` until `-vvv`. `SITEGEN_LOG_LEVEL` takes a full filter directive
//! and wins over the flags when it parses.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, ColorChoice, OutputFormat};

/// Environment variable that overrides the verbosity flags.
pub const LOG_LEVEL_ENV: &str = "SITEGEN_LOG_LEVEL";

/// Target prefix shared by `sitegen`, `sitegen_core` and `sitegen_render`.
const WORKSPACE_TARGET: &str = "sitegen";

/// Log output format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, optionally coloured.
    #[default]
    Human,
    /// Newline-delimited JSON.
    Json,
}

impl From<OutputFormat> for LogFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Filter directive for a `-v` count.
#[must_use]
pub fn verbosity_directive(verbosity: u8) -> String {
    match verbosity {
        0 => "warn".to_string(),
        1 => format!("warn,{WORKSPACE_TARGET}=info"),
        2 => format!("warn,{WORKSPACE_TARGET}=debug"),
        _ => "trace".to_string(),
    }
}

/// Resolved logging setup for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive in effect.
    pub directive: String,
    /// Emit ANSI colours (human format only).
    pub ansi: bool,
    /// Print event targets; on from `-vv`.
    pub show_target: bool,
    /// An override from the environment that failed to parse.
    pub rejected_override: Option<String>,
}

impl LogSettings {
    /// Settings for the parsed command line, or `None` under `--quiet`.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        if cli.quiet {
            return None;
        }
        let ansi = match cli.color {
            ColorChoice::Auto => {
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Some(Self::resolve(
            cli.log_format.into(),
            cli.verbose,
            ansi,
            std::env::var(LOG_LEVEL_ENV).ok(),
        ))
    }

    /// Combine the flags with an optional environment override.
    #[must_use]
    pub fn resolve(
        format: LogFormat,
        verbosity: u8,
        ansi: bool,
        env_override: Option<String>,
    ) -> Self {
        let env_override = env_override.filter(|value| !value.trim().is_empty());
        let (directive, rejected_override) = match env_override {
            Some(value) if EnvFilter::try_new(&value).is_ok() => (value, None),
            rejected => (verbosity_directive(verbosity), rejected),
        };

        Self {
            format,
            directive,
            ansi: ansi && format == LogFormat::Human,
            show_target: verbosity >= 2,
            rejected_override,
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Install the global subscriber on stderr.
///
/// A second call is a no-op, so tests may call it freely.
pub fn init_logging(settings: &LogSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(settings.filter())
        .with_target(settings.show_target)
        .with_writer(std::io::stderr);

    let _ = match settings.format {
        LogFormat::Human => builder.with_ansi(settings.ansi).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Some(value) = &settings.rejected_override {
        tracing::warn!(
            env = LOG_LEVEL_ENV,
            value = %value,
            "ignoring unparsable log filter"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn verbosity_scopes_to_workspace() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "warn,sitegen=info");
        assert_eq!(verbosity_directive(2), "warn,sitegen=debug");
        assert_eq!(verbosity_directive(3), "trace");
        assert_eq!(verbosity_directive(255), "trace");
    }

    #[test]
    fn env_override_wins_when_valid() {
        let settings = LogSettings::resolve(
            LogFormat::Human,
            0,
            false,
            Some("sitegen::build=trace".to_string()),
        );
        assert_eq!(settings.directive, "sitegen::build=trace");
        assert_eq!(settings.rejected_override, None);
    }

    #[test]
    fn invalid_env_override_falls_back() {
        let settings =
            LogSettings::resolve(LogFormat::Human, 1, false, Some("sitegen=loud".to_string()));
        assert_eq!(settings.directive, "warn,sitegen=info");
        assert_eq!(settings.rejected_override.as_deref(), Some("sitegen=loud"));
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let settings = LogSettings::resolve(LogFormat::Human, 2, false, Some("  ".to_string()));
        assert_eq!(settings.directive, "warn,sitegen=debug");
        assert_eq!(settings.rejected_override, None);
        assert!(settings.show_target);
    }

    #[test]
    fn json_never_uses_ansi() {
        let settings = LogSettings::resolve(LogFormat::Json, 0, true, None);
        assert!(!settings.ansi);
        assert!(LogSettings::resolve(LogFormat::Human, 0, true, None).ansi);
    }

    #[test]
    fn quiet_installs_nothing() {
        let cli = Cli::try_parse_from(["sitegen", "-q", "check"]).unwrap();
        assert_eq!(LogSettings::from_cli(&cli), None);
    }

    #[test]
    fn cli_flags_reach_settings() {
        let cli = Cli::try_parse_from([
            "sitegen",
            "--log-format",
            "json",
            "--color",
            "always",
            "check",
        ])
        .unwrap();
        let settings = LogSettings::from_cli(&cli).unwrap();
        assert_eq!(settings.format, LogFormat::Json);
        assert!(!settings.ansi);
    }

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging(&LogSettings::resolve(LogFormat::Human, 0, false, None));
        init_logging(&LogSettings::resolve(LogFormat::Json, 3, false, None));
    }
}

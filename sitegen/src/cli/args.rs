//! CLI argument definitions
//!
//! All Clap derive structs for `sitegen` command-line parsing.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Build the diary, review and dialogue pages and narration scripts.
#[derive(Parser, Debug)]
#[command(name = "sitegen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and summaries; errors are still printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SITEGEN_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "SITEGEN_LOG_FORMAT")]
    pub log_format: OutputFormat,

    /// Path to the site configuration file (default: ./sitegen.yaml if present).
    #[arg(short, long, global = true, env = "SITEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate pages and scripts.
    Build(BuildCommand),

    /// Parse every source directory and report problems without writing.
    Check(CheckArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Build Command
// ============================================================================

/// Build commands.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// What to build.
    #[command(subcommand)]
    pub subcommand: BuildSubcommand,
}

/// Build targets.
#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// Build every page and the scripts.
    All,

    /// Build the diary page.
    Diary(TargetArgs),

    /// Build the review page.
    Reviews(TargetArgs),

    /// Build the dialogue transcript page.
    Dialogue(TargetArgs),

    /// Export dialogue documents as narration scripts.
    Script(ScriptArgs),
}

/// Source and output overrides for a page build.
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Source directory of Markdown files.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output HTML file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `build script`.
#[derive(Args, Debug, Default)]
pub struct ScriptArgs {
    /// Source directory of dialogue documents.
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory for script files.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Speaker-name prefix that selects the child channel.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub child_prefix: Option<String>,
}

// ============================================================================
// Check / Completions / Version
// ============================================================================

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Fail if any source file would be skipped.
    #[arg(long)]
    pub strict: bool,

    /// Summary format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all() {
        let cli = Cli::try_parse_from(["sitegen", "build", "all"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Build(BuildCommand {
                subcommand: BuildSubcommand::All
            })
        ));
    }

    #[test]
    fn test_build_diary_overrides() {
        let cli = Cli::try_parse_from([
            "sitegen", "build", "diary", "--source", "notes", "--output", "out/d.html",
        ])
        .unwrap();

        if let Commands::Build(cmd) = cli.command {
            if let BuildSubcommand::Diary(args) = cmd.subcommand {
                assert_eq!(args.source, Some(PathBuf::from("notes")));
                assert_eq!(args.output, Some(PathBuf::from("out/d.html")));
                return;
            }
        }
        panic!("Expected diary TargetArgs");
    }

    #[test]
    fn test_empty_child_prefix_rejected() {
        let cli = Cli::try_parse_from(["sitegen", "build", "script", "--child-prefix", ""]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sitegen", "check", "-vv", "--quiet", "--config", "site.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("site.yaml")));
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["sitegen", "check"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert!(!args.strict);
            assert_eq!(args.format, OutputFormat::Human);
            return;
        }
        panic!("Expected CheckArgs");
    }

    #[test]
    fn test_missing_build_target() {
        let result = Cli::try_parse_from(["sitegen", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["sitegen", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["sitegen", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["sitegen", "completions", "powershell"]).unwrap();
        if let Commands::Completions(args) = cli.command {
            assert_eq!(args.shell, Shell::PowerShell);
            return;
        }
        panic!("Expected CompletionsArgs");
    }
}

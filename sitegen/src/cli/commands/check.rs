//! `check` command handler.
//!
//! Runs every loader over every source directory without writing. Skipped
//! files are logged as warnings by the loaders themselves.

use serde::Serialize;

use crate::build::{BuildReport, Target, diary, dialogue, reviews};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::{PageKind, SiteConfig};
use crate::error::SitegenError;

#[derive(Debug, Serialize)]
struct CheckSummary {
    targets: Vec<BuildReport>,
    skipped: usize,
}

/// Execute `check`.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if a source directory cannot be read, or
/// [`SitegenError::Strict`] if `--strict` is set and any file was skipped.
pub async fn run(args: &CheckArgs, config: &SiteConfig, quiet: bool) -> Result<(), SitegenError> {
    let summary = collect(config).await?;

    if !quiet {
        match args.format {
            OutputFormat::Human => {
                for report in &summary.targets {
                    println!("{report}");
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&summary).unwrap_or_default();
                println!("{json}");
            }
        }
    }

    if args.strict && summary.skipped > 0 {
        return Err(SitegenError::Strict {
            skipped: summary.skipped,
        });
    }
    Ok(())
}

async fn collect(config: &SiteConfig) -> Result<CheckSummary, SitegenError> {
    let diary_dir = config.page(PageKind::Diary).source;
    let reviews_dir = config.page(PageKind::Reviews).source;
    let dialogue_dir = config.page(PageKind::Dialogue).source;
    let script_dir = config.script_target().source;

    let mut targets = vec![
        BuildReport::from_loaded(Target::Diary, &diary::load(&diary_dir).await?),
        BuildReport::from_loaded(Target::Reviews, &reviews::load(&reviews_dir).await?),
        BuildReport::from_loaded(Target::Dialogue, &dialogue::load(&dialogue_dir).await?),
    ];
    if script_dir != dialogue_dir {
        targets.push(BuildReport::from_loaded(
            Target::Script,
            &dialogue::load(&script_dir).await?,
        ));
    }

    let skipped = targets.iter().map(|t| t.skipped).sum();
    Ok(CheckSummary { targets, skipped })
}

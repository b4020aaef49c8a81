//! `build` command handler.

use crate::build::{BuildReport, diary, dialogue, reviews, script};
use crate::cli::args::{BuildSubcommand, ScriptArgs, TargetArgs};
use crate::config::{PageKind, PageTarget, ScriptTarget, SiteConfig};
use crate::error::SitegenError;

/// Execute `build <target>` and print one summary line per output.
///
/// # Errors
///
/// Returns the first filesystem or render error; earlier targets of
/// `build all` stay written.
pub async fn run(
    subcommand: BuildSubcommand,
    config: &SiteConfig,
    quiet: bool,
) -> Result<(), SitegenError> {
    let child_prefix = &config.script.settings.child_prefix;

    let reports = match subcommand {
        BuildSubcommand::All => build_all(config).await?,
        BuildSubcommand::Diary(args) => {
            vec![diary::build(&page_target(config, PageKind::Diary, &args)).await?]
        }
        BuildSubcommand::Reviews(args) => {
            vec![reviews::build(&page_target(config, PageKind::Reviews, &args)).await?]
        }
        BuildSubcommand::Dialogue(args) => {
            let target = page_target(config, PageKind::Dialogue, &args);
            vec![dialogue::build(&target, child_prefix).await?]
        }
        BuildSubcommand::Script(args) => {
            vec![script::build(&script_target(config, args)).await?]
        }
    };

    if !quiet {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}

async fn build_all(config: &SiteConfig) -> Result<Vec<BuildReport>, SitegenError> {
    tracing::info!("building all targets");
    Ok(vec![
        diary::build(&config.page(PageKind::Diary)).await?,
        reviews::build(&config.page(PageKind::Reviews)).await?,
        dialogue::build(
            &config.page(PageKind::Dialogue),
            &config.script.settings.child_prefix,
        )
        .await?,
        script::build(&config.script_target()).await?,
    ])
}

/// Apply `--source`/`--output` on top of the configured target.
fn page_target(config: &SiteConfig, kind: PageKind, args: &TargetArgs) -> PageTarget {
    let mut target = config.page(kind);
    if let Some(source) = &args.source {
        target.source.clone_from(source);
    }
    if let Some(output) = &args.output {
        target.output.clone_from(output);
    }
    target
}

fn script_target(config: &SiteConfig, args: ScriptArgs) -> ScriptTarget {
    let mut target = config.script_target();
    if let Some(source) = args.source {
        target.source = source;
    }
    if let Some(output) = args.output {
        target.output_dir = output;
    }
    if let Some(prefix) = args.child_prefix {
        target.settings.child_prefix = prefix;
    }
    target
}

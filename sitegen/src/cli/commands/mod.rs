//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod check;
pub mod completions;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::config;
use crate::error::SitegenError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if configuration loading or the command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), SitegenError> {
    match cli.command {
        Commands::Build(cmd) => {
            let config = config::load(cli.config.as_deref()).await?;
            build::run(cmd.subcommand, &config, cli.quiet).await
        }
        Commands::Check(args) => {
            let config = config::load(cli.config.as_deref()).await?;
            check::run(&args, &config, cli.quiet).await
        }
        Commands::Completions(args) => completions::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

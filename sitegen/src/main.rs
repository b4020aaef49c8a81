//! `sitegen` - static page and narration script builder

use clap::Parser;

use sitegen::cli::args::Cli;
use sitegen::cli::commands;
use sitegen::error::ExitCode;
use sitegen::observability::{LogSettings, init_logging};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            std::process::exit(code);
        }
    };

    if let Some(settings) = LogSettings::from_cli(&cli) {
        init_logging(&settings);
    }

    match commands::dispatch(cli).await {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

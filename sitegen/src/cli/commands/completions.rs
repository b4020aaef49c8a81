//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs, Shell};
use crate::error::SitegenError;

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

/// Print the completion script for `args.shell` to stdout.
///
/// # Errors
///
/// Returns [`SitegenError::File`] if stdout cannot be flushed.
pub fn run(args: &CompletionsArgs) -> Result<(), SitegenError> {
    let mut stdout = std::io::stdout().lock();
    write_script(args.shell, &mut stdout);
    stdout.flush().map_err(SitegenError::file("write", "<stdout>"))
}

/// Write the completion script for `shell`, registered under the binary name.
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(clap_complete::Shell::from(shell), &mut cmd, bin, out);
}

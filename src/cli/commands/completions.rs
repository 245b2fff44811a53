//! `completions` command handler.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;

/// Prints the completion script for the requested shell.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn run(args: &CompletionsArgs) -> Result<()> {
    std::io::stdout().write_all(&script(args.shell))?;
    Ok(())
}

/// Completion script for `shell` as bytes.
#[must_use]
pub fn script(shell: Shell) -> Vec<u8> {
    let mut out = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), env!("CARGO_PKG_NAME"), &mut out);
    out
}

//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod export;
pub mod generate;
pub mod inspect;
pub mod list;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::error::Result;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// Without a subcommand every built-in report is generated as a PDF in the
/// working directory.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    match cli.command {
        None => generate::run(&GenerateArgs::default(), quiet),
        Some(Commands::Generate(args)) => generate::run(&args, quiet),
        Some(Commands::List(args)) => list::run(&args),
        Some(Commands::Validate(args)) => validate::run(&args, quiet),
        Some(Commands::Export(args)) => export::run(&args),
        Some(Commands::Inspect(args)) => inspect::run(&args),
        Some(Commands::Completions(args)) => completions::run(&args),
        Some(Commands::Version(args)) => version::run(&args),
    }
}

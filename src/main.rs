//! `endoreport` - static PDF reports for the GI endoscopy project

use clap::Parser;

use endoreport::cli::args::Cli;
use endoreport::cli::commands;
use endoreport::error::ExitCode;
use endoreport::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: report generation failed: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

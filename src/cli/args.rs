//! CLI argument definitions
//!
//! All Clap derive structs for `endoreport` command-line parsing.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::render::OutputFormat as ReportFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Static PDF report generator for the GI endoscopy project.
///
/// Without a subcommand, writes both built-in reports as PDFs to the
/// working directory.
#[derive(Parser, Debug)]
#[command(name = "endoreport", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ENDOREPORT_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one or more reports.
    Generate(GenerateArgs),

    /// List the built-in reports.
    List(ListArgs),

    /// Validate content files without rendering them.
    Validate(ValidateArgs),

    /// Print the YAML content of a built-in report.
    Export(ExportArgs),

    /// Print the heading and table outline of a report.
    Inspect(InspectArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Built-in reports to generate (default: all).
    #[arg(conflicts_with = "content")]
    pub reports: Vec<String>,

    /// Output file; only valid for a single report.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for output files named after each report.
    #[arg(long, env = "ENDOREPORT_OUTPUT_DIR", conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "pdf")]
    pub format: ReportFormat,

    /// Custom YAML content file instead of a built-in report.
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Date printed in the footer, as YYYY-MM-DD (default: today).
    #[arg(long, env = "ENDOREPORT_DATE")]
    pub date: Option<NaiveDate>,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Built-in report id.
    pub report: String,
}

/// Arguments for `inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Built-in report id.
    #[arg(required_unless_present = "content")]
    pub report: Option<String>,

    /// Inspect a custom content file instead.
    #[arg(short, long, conflicts_with = "report")]
    pub content: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Date substituted into the content (default: today).
    #[arg(long, env = "ENDOREPORT_DATE")]
    pub date: Option<NaiveDate>,
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

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Output format for command listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["endoreport"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["endoreport", "generate"]).unwrap();
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("Expected GenerateArgs");
        };
        assert!(args.reports.is_empty());
        assert_eq!(args.format, ReportFormat::Pdf);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_generate_with_options() {
        let cli = Cli::try_parse_from([
            "endoreport",
            "generate",
            "training",
            "--output",
            "out.md",
            "--format",
            "markdown",
            "--date",
            "2026-10-19",
        ])
        .unwrap();
        let Some(Commands::Generate(args)) = cli.command else {
            panic!("Expected GenerateArgs");
        };
        assert_eq!(args.reports, vec!["training".to_string()]);
        assert_eq!(args.format, ReportFormat::Markdown);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 10, 19));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = Cli::try_parse_from(["endoreport", "generate", "--date", "19/10/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_and_output_dir_conflict() {
        let result = Cli::try_parse_from([
            "endoreport",
            "generate",
            "--output",
            "a.pdf",
            "--output-dir",
            "out",
        ]);
        assert!(result.is_err(), "Expected conflict error");
    }

    #[test]
    fn test_content_conflicts_with_report_ids() {
        let result =
            Cli::try_parse_from(["endoreport", "generate", "project", "--content", "x.yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["endoreport", "validate"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_inspect_requires_report_or_content() {
        assert!(Cli::try_parse_from(["endoreport", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["endoreport", "inspect", "project"]).is_ok());
        assert!(Cli::try_parse_from(["endoreport", "inspect", "--content", "x.yaml"]).is_ok());
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["endoreport", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["endoreport", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["endoreport", "--color", variant, "list"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["endoreport", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["endoreport", "list", "-vv", "--quiet", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_exit_code_mapping() {
        use crate::error::{ContentError, DocumentError, ExitCode, RenderError, ReportError};

        let cases: Vec<(ReportError, i32)> = vec![
            (
                ContentError::MissingFile {
                    path: PathBuf::from("/x"),
                }
                .into(),
                ExitCode::CONTENT_ERROR,
            ),
            (
                DocumentError::EmptyTable("rows").into(),
                ExitCode::RENDER_ERROR,
            ),
            (RenderError::EmptyOutput.into(), ExitCode::RENDER_ERROR),
            (ReportError::Usage("x".into()), ExitCode::USAGE_ERROR),
            (
                std::io::Error::new(std::io::ErrorKind::NotFound, "x").into(),
                ExitCode::IO_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.exit_code(), expected, "Wrong exit code for {err}");
        }
    }
}

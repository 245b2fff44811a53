//! Error types for `endoreport`
//!
//! Every failure is reported to the user as a single
//! `report generation failed: <cause>` line; the variants below only exist
//! to pick an exit code and to keep the cause readable.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `endoreport` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (invalid YAML, validation failure)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Layout or PDF rendering error
    pub const RENDER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, unknown report)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Content loading or validation error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Document construction error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Layout or output rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Requested report id is not built in
    #[error("unknown report '{id}'{}", .suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
    UnknownReport {
        /// The id that was requested
        id: String,
        /// Closest built-in id, if any
        suggestion: Option<String>,
    },

    /// Invalid combination of arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ReportError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(_) | Self::Yaml(_) | Self::Json(_) => ExitCode::CONTENT_ERROR,
            Self::Document(_) | Self::Render(_) => ExitCode::RENDER_ERROR,
            Self::UnknownReport { .. } | Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Content Errors
// ============================================================================

/// Content file loading and validation errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// YAML parsing failed
    #[error("parse error in {}{}: {message}", .path.display(), .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    ParseError {
        /// Path to the content file (or `<embedded:id>` for built-ins)
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Content validation failed
    #[error("validation failed for {path}: {}", summarize(.errors))]
    ValidationError {
        /// Path to the content file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Content file not found
    #[error("file not found: {}", .path.display())]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Content file exists but cannot be read as UTF-8 text
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Content file is empty
    #[error("content file is empty: {}", .path.display())]
    Empty {
        /// Path to the empty file
        path: PathBuf,
    },

    /// Content file exceeds the size limit
    #[error("content file too large: {size} bytes (limit: {limit})")]
    TooLarge {
        /// Actual size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

fn summarize(errors: &[ValidationIssue]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a content file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationIssue {
    /// Path to the problematic field (e.g., "sections[2].blocks[0].table")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Prevents the content from being used
    Error,
    /// Informational, content still renders
    Warning,
}

// ============================================================================
// Document Errors
// ============================================================================

/// Errors raised while assembling the ordered block list.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A table row does not have one cell per column
    #[error("table row {row} has {found} cells, expected {expected}")]
    RaggedTable {
        /// Zero-based row index
        row: usize,
        /// Number of columns declared by the widths
        expected: usize,
        /// Number of cells in the row
        found: usize,
    },

    /// A table was declared without columns or rows
    #[error("table has no {0}")]
    EmptyTable(&'static str),

    /// A dimension was zero, negative or not finite
    #[error("invalid {what}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected
        what: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A color string could not be parsed
    #[error("invalid color '{0}' (expected #rrggbb or a named color)")]
    InvalidColor(String),
}

// ============================================================================
// Render Errors
// ============================================================================

/// Layout and output rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page frame has no room for content
    #[error("page margins leave no printable area ({width}x{height}pt)")]
    NoPrintableArea {
        /// Frame width in points
        width: f32,
        /// Frame height in points
        height: f32,
    },

    /// The PDF backend failed
    #[error("PDF backend error: {0}")]
    Pdf(String),

    /// Rendering produced no bytes
    #[error("renderer produced empty output")]
    EmptyOutput,

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `endoreport` operations.
pub type Result<T> = std::result::Result<T, ReportError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONTENT_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::RENDER_ERROR, 4);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_content_error_exit_code() {
        let err: ReportError = ContentError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONTENT_ERROR);
    }

    #[test]
    fn test_document_error_exit_code() {
        let err: ReportError = DocumentError::EmptyTable("rows").into();
        assert_eq!(err.exit_code(), ExitCode::RENDER_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ReportError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_unknown_report_with_suggestion() {
        let err = ReportError::UnknownReport {
            id: "trainig".to_string(),
            suggestion: Some("training".to_string()),
        };
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
        assert_eq!(
            err.to_string(),
            "unknown report 'trainig' (did you mean 'training'?)"
        );
    }

    #[test]
    fn test_unknown_report_without_suggestion() {
        let err = ReportError::UnknownReport {
            id: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown report 'zzz'");
    }

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "sections[0].heading".to_string(),
            message: "heading is empty".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            issue.to_string(),
            "error: heading is empty at sections[0].heading"
        );
    }

    #[test]
    fn test_validation_error_summarizes_first_issue() {
        let issue = |m: &str| ValidationIssue {
            path: "sections".to_string(),
            message: m.to_string(),
            severity: Severity::Error,
        };
        let err = ContentError::ValidationError {
            path: "report.yaml".to_string(),
            errors: vec![issue("first"), issue("second"), issue("third")],
        };
        let text = err.to_string();
        assert!(text.contains("first"));
        assert!(text.contains("and 2 more"));
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = ContentError::ParseError {
            path: PathBuf::from("report.yaml"),
            line: Some(42),
            message: "unexpected token".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("report.yaml"));
        assert!(text.contains("line 42"));
        assert!(text.contains("unexpected token"));
    }

    #[test]
    fn test_ragged_table_display() {
        let err = DocumentError::RaggedTable {
            row: 3,
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "table row 3 has 3 cells, expected 2");
    }
}

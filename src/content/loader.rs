//! Content loader.
//!
//! Loading runs in four stages:
//! 1. Size limit check
//! 2. Empty-file rejection
//! 3. YAML parsing into [`ReportContent`]
//! 4. Validation (all issues collected, errors abort, warnings are returned)

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::content::schema::ReportContent;
use crate::content::validation::Validator;
use crate::error::{ContentError, ValidationIssue};

/// Environment variable overriding the content size limit.
pub const MAX_CONTENT_SIZE_ENV: &str = "ENDOREPORT_MAX_CONTENT_SIZE";

/// Default content size limit in bytes.
pub const DEFAULT_MAX_CONTENT_SIZE: usize = 1024 * 1024;

/// Limits applied while loading content.
#[derive(Debug, Clone)]
pub struct ContentLimits {
    /// Maximum content size in bytes.
    pub max_content_size: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_content_size: env_or(MAX_CONTENT_SIZE_ENV, DEFAULT_MAX_CONTENT_SIZE),
        }
    }
}

/// Loaded content and the warnings raised by validation.
#[derive(Debug)]
pub struct LoadResult {
    /// Validated content.
    pub content: ReportContent,
    /// Non-fatal issues.
    pub warnings: Vec<ValidationIssue>,
}

/// Loads and validates a content file.
///
/// # Errors
///
/// Returns `ContentError::MissingFile` when the file does not exist,
/// `ContentError::Read` when it exists but cannot be read as UTF-8,
/// `ContentError::TooLarge` or `ContentError::Empty` for unusable files,
/// `ContentError::ParseError` for malformed YAML and
/// `ContentError::ValidationError` when validation finds errors.
pub fn load_file(path: &Path, limits: &ContentLimits) -> Result<LoadResult, ContentError> {
    let metadata = std::fs::metadata(path).map_err(|e| read_error(path, e))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > limits.max_content_size {
        return Err(ContentError::TooLarge {
            size,
            limit: limits.max_content_size,
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    debug!(path = %path.display(), bytes = raw.len(), "read content file");

    load_from_str(&raw, path, limits)
}

fn read_error(path: &Path, source: std::io::Error) -> ContentError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ContentError::MissingFile {
            path: path.to_path_buf(),
        }
    } else {
        ContentError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parses and validates content held in memory.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Same as [`load_file`], minus `MissingFile` and `Read`.
pub fn load_from_str(
    source: &str,
    origin: &Path,
    limits: &ContentLimits,
) -> Result<LoadResult, ContentError> {
    if source.len() > limits.max_content_size {
        return Err(ContentError::TooLarge {
            size: source.len(),
            limit: limits.max_content_size,
        });
    }

    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    if source.trim().is_empty() {
        return Err(ContentError::Empty {
            path: origin.to_path_buf(),
        });
    }

    let content = parse(source, origin)?;

    let result = Validator::new().validate(&content);
    if result.has_errors() {
        return Err(ContentError::ValidationError {
            path: origin.display().to_string(),
            errors: result.errors,
        });
    }
    for issue in &result.warnings {
        warn!(path = %origin.display(), "{issue}");
    }

    Ok(LoadResult {
        content,
        warnings: result.warnings,
    })
}

/// Parses content without validating it.
///
/// # Errors
///
/// Returns `ContentError::ParseError` with the failing line when known.
pub fn parse(source: &str, origin: &Path) -> Result<ReportContent, ContentError> {
    serde_yaml::from_str(source).map_err(|e| ContentError::ParseError {
        path: origin.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Pseudo-path used in messages about embedded content.
#[must_use]
pub fn embedded_origin(id: &str) -> PathBuf {
    PathBuf::from(format!("<embedded:{id}>"))
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r"
id: demo
title: Demo Report
cover:
  titles: [Demo]
sections:
  - heading: Summary
    blocks:
      - type: paragraph
        text: Hello
";

    fn limits() -> ContentLimits {
        ContentLimits {
            max_content_size: DEFAULT_MAX_CONTENT_SIZE,
        }
    }

    #[test]
    fn test_load_valid_content() {
        let result = load_from_str(VALID, Path::new("demo.yaml"), &limits()).unwrap();
        assert_eq!(result.content.id, "demo");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_load_strips_bom() {
        let source = format!("\u{feff}{VALID}");
        assert!(load_from_str(&source, Path::new("bom.yaml"), &limits()).is_ok());
    }

    #[test]
    fn test_empty_content_rejected() {
        let err = load_from_str("  \n\n", Path::new("empty.yaml"), &limits()).unwrap_err();
        assert!(matches!(err, ContentError::Empty { .. }));
    }

    #[test]
    fn test_parse_error_has_line() {
        let err = load_from_str("id: [unclosed\ntitle: x\n", Path::new("bad.yaml"), &limits())
            .unwrap_err();
        match err {
            ContentError::ParseError { line, path, .. } => {
                assert!(line.is_some());
                assert_eq!(path, PathBuf::from("bad.yaml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_collects_issues() {
        let source = VALID.replace("heading: Summary", "heading: ''").replace("id: demo", "id: ''");
        let err = load_from_str(&source, Path::new("x.yaml"), &limits()).unwrap_err();
        match err {
            ContentError::ValidationError { errors, .. } => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_size_limit() {
        let tight = ContentLimits {
            max_content_size: 10,
        };
        let err = load_from_str(VALID, Path::new("big.yaml"), &tight).unwrap_err();
        assert!(matches!(err, ContentError::TooLarge { limit: 10, .. }));
    }

    #[test]
    fn test_load_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();
        let result = load_file(file.path(), &limits()).unwrap();
        assert_eq!(result.content.title, "Demo Report");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("/nonexistent/content.yaml"), &limits()).unwrap_err();
        assert!(matches!(err, ContentError::MissingFile { .. }));
    }

    #[test]
    fn test_non_utf8_file_is_a_read_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"id: \xff\xfe\n").unwrap();
        let err = load_file(file.path(), &limits()).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }), "{err:?}");
        assert!(err.to_string().starts_with("cannot read "), "{err}");
    }

    #[test]
    fn test_embedded_origin() {
        assert_eq!(
            embedded_origin("training").display().to_string(),
            "<embedded:training>"
        );
    }
}

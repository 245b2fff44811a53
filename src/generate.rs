//! End-to-end generation: load content, compose, render, write.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::compose::{ComposeOptions, compose};
use crate::content::loader::{ContentLimits, LoadResult, load_file};
use crate::content::schema::ReportContent;
use crate::document::Document;
use crate::error::{RenderError, ReportError, Result};
use crate::render::{OutputFormat, create_renderer};
use crate::reports::{BuiltinReport, find_report, suggest_report};

/// Where report content comes from.
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Content embedded in the binary.
    Builtin(&'static BuiltinReport),
    /// A YAML content file.
    File(PathBuf),
}

impl ContentSource {
    /// Resolves a built-in report id.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnknownReport`, with the closest id when one is
    /// near enough.
    pub fn builtin(id: &str) -> Result<Self> {
        find_report(id)
            .map(Self::Builtin)
            .ok_or_else(|| ReportError::UnknownReport {
                id: id.to_string(),
                suggestion: suggest_report(id),
            })
    }

    /// Loads and validates the content.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Content` when the content cannot be read,
    /// parsed or validated.
    pub fn load(&self) -> Result<LoadResult> {
        let result = match self {
            Self::Builtin(report) => report.load()?,
            Self::File(path) => load_file(path, &ContentLimits::default())?,
        };
        Ok(result)
    }
}

/// One generation job.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Content to render.
    pub source: ContentSource,
    /// Explicit output path; derived from the content when absent.
    pub output: Option<PathBuf>,
    /// Directory for derived output paths.
    pub output_dir: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Date substituted for `{date}`.
    pub date: NaiveDate,
}

/// Outcome of a generation job.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GenerateReport {
    /// Report id.
    pub report: String,
    /// Written file.
    pub path: PathBuf,
    /// File size in bytes.
    pub bytes: usize,
    /// Page count for paginated formats.
    pub pages: Option<usize>,
}

/// Output path for `content` in `format`, placed in `dir` when given.
///
/// The content's file name is kept for PDF; other formats swap the
/// extension.
#[must_use]
pub fn default_output_path(
    content: &ReportContent,
    dir: Option<&Path>,
    format: OutputFormat,
) -> PathBuf {
    let mut name = PathBuf::from(content.output_file());
    if format != OutputFormat::Pdf {
        name.set_extension(format.extension());
    }
    dir.map_or_else(|| name.clone(), |d| d.join(&name))
}

/// Composes the document for already loaded content.
///
/// # Errors
///
/// Returns `ReportError::Document` when the content cannot form a valid
/// document.
pub fn build_document(content: &ReportContent, date: NaiveDate) -> Result<Document> {
    Ok(compose(content, &ComposeOptions { date })?)
}

/// Runs one generation job.
///
/// # Errors
///
/// Returns the first failure among loading, composing, rendering and
/// writing.
pub fn generate(request: &GenerateRequest) -> Result<GenerateReport> {
    let loaded = request.source.load()?;
    let content = &loaded.content;
    let doc = build_document(content, request.date)?;

    let rendered = create_renderer(request.format).render(&doc)?;
    if rendered.bytes.is_empty() {
        return Err(RenderError::EmptyOutput.into());
    }

    let path = request.output.clone().unwrap_or_else(|| {
        default_output_path(content, request.output_dir.as_deref(), request.format)
    });
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &rendered.bytes)?;

    info!(
        report = %content.id,
        path = %path.display(),
        bytes = rendered.bytes.len(),
        pages = rendered.pages,
        format = %request.format,
        "report written"
    );

    Ok(GenerateReport {
        report: content.id.clone(),
        path,
        bytes: rendered.bytes.len(),
        pages: rendered.pages,
    })
}

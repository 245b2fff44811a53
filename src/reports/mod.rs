//! Built-in reports.
//!
//! Report content is embedded in the binary at compile time, so
//! `endoreport` with no arguments reproduces both documents without any
//! file on disk.

use std::sync::LazyLock;

use crate::content::loader::{self, ContentLimits, LoadResult, embedded_origin};
use crate::error::ContentError;

// ============================================================================
// Types
// ============================================================================

/// A report whose content ships with the binary.
#[derive(Debug)]
pub struct BuiltinReport {
    /// Identifier used on the command line.
    pub id: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Raw YAML content.
    pub yaml: &'static str,
}

impl BuiltinReport {
    /// Parses and validates the embedded content.
    ///
    /// # Errors
    ///
    /// Returns a `ContentError` if the embedded YAML is invalid, which the
    /// test-suite rules out for every shipped report.
    pub fn load(&self) -> Result<LoadResult, ContentError> {
        let limits = ContentLimits {
            max_content_size: usize::MAX,
        };
        loader::load_from_str(self.yaml, &embedded_origin(self.id), &limits)
    }
}

// ============================================================================
// Registry
// ============================================================================

static BUILTIN_REPORTS: LazyLock<Vec<BuiltinReport>> = LazyLock::new(|| {
    vec![
        BuiltinReport {
            id: "project",
            description: "Complete project report: ML pipeline, backend, frontend, deployment",
            yaml: include_str!("../../reports/project.yaml"),
        },
        BuiltinReport {
            id: "training",
            description: "Machine learning training report for the ViT ensemble",
            yaml: include_str!("../../reports/training.yaml"),
        },
    ]
});

// ============================================================================
// Public API
// ============================================================================

/// Looks up a report by exact id.
#[must_use]
pub fn find_report(id: &str) -> Option<&'static BuiltinReport> {
    BUILTIN_REPORTS.iter().find(|r| r.id == id)
}

/// All built-in reports in registry order.
#[must_use]
pub fn list_reports() -> Vec<&'static BuiltinReport> {
    BUILTIN_REPORTS.iter().collect()
}

/// Suggests the closest report id for typo correction.
///
/// Returns a match only when its Damerau-Levenshtein distance is at most 3.
#[must_use]
pub fn suggest_report(input: &str) -> Option<String> {
    BUILTIN_REPORTS
        .iter()
        .map(|r| (r.id, strsim::damerau_levenshtein(input, r.id)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(id, _)| id.to_string())
}

/// Report ids in registry order.
#[must_use]
pub fn report_ids() -> Vec<&'static str> {
    BUILTIN_REPORTS.iter().map(|r| r.id).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::schema::SectionBlock;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids = report_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids, vec!["project", "training"]);
    }

    #[test]
    fn test_all_builtins_load() {
        for report in list_reports() {
            let result = report
                .load()
                .unwrap_or_else(|e| panic!("{} failed to load: {e}", report.id));
            assert_eq!(result.content.id, report.id);
            assert!(result.content.output.is_some(), "{} has no output", report.id);
            assert!(
                result.warnings.is_empty(),
                "{} has warnings: {:?}",
                report.id,
                result.warnings
            );
        }
    }

    #[test]
    fn test_find_report() {
        let training = find_report("training").unwrap().load().unwrap().content;
        assert_eq!(training.output_file(), "ML_Training_Report.pdf");
        assert!(find_report("Training").is_none());
        assert!(find_report("").is_none());
    }

    #[test]
    fn test_suggest_report() {
        assert_eq!(suggest_report("trainig"), Some("training".to_string()));
        assert_eq!(suggest_report("projet"), Some("project".to_string()));
        assert_eq!(suggest_report("completely-different"), None);
    }

    #[test]
    fn test_project_sections() {
        let content = find_report("project").unwrap().load().unwrap().content;
        assert_eq!(
            content.headings(),
            vec![
                "Executive Summary",
                "Machine Learning Pipeline",
                "Backend API System",
                "Frontend Portal",
                "Deployment Architecture",
                "Technical Specifications",
                "Features & Capabilities",
                "Conclusion",
            ]
        );
        assert!(content.cover.page_break_after);
        assert!(content.sections[1..].iter().all(|s| s.break_before));
    }

    #[test]
    fn test_training_sections_and_breaks() {
        let content = find_report("training").unwrap().load().unwrap().content;
        let breaks: Vec<(&str, bool)> = content
            .sections
            .iter()
            .map(|s| (s.heading.as_str(), s.break_before))
            .collect();
        assert_eq!(
            breaks,
            vec![
                ("Executive Summary", false),
                ("1. Methodology", true),
                ("2. Model Architecture", true),
                ("3. Training Configuration", false),
                ("4. Advanced Training Techniques", false),
                ("5. Data Augmentation", true),
                ("6. Code Architecture", true),
                ("7. Computational Requirements", true),
                ("8. Conclusion", true),
            ]
        );
    }

    #[test]
    fn test_training_config_table() {
        let content = find_report("training").unwrap().load().unwrap().content;
        let table = content
            .sections
            .iter()
            .flat_map(|s| &s.blocks)
            .find_map(|b| match b {
                SectionBlock::Table(t) => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(table.all_rows().len(), 8);
        assert_eq!(table.header, vec!["Parameter", "Value", "Rationale"]);
        assert_eq!(table.rows[3], vec![
            "Learning Rate",
            "1e-5",
            "Conservative learning rate for fine-tuning"
        ]);
        assert_eq!(table.header_padding, Some(12.0));
    }

    #[test]
    fn test_multiline_paragraphs_fold_to_single_spaces() {
        for report in list_reports() {
            let content = report.load().unwrap().content;
            for section in &content.sections {
                for block in &section.blocks {
                    if let SectionBlock::Paragraph { text } = block {
                        assert!(!text.contains('\n'), "{}: newline in paragraph", report.id);
                        assert!(!text.contains("  "), "{}: double space", report.id);
                    }
                }
            }
        }
    }
}

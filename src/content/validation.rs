//! Content validation.
//!
//! Runs on fully deserialized [`ReportContent`] and collects every issue
//! instead of stopping at the first, so a broken content file can be fixed
//! in one pass.

use std::collections::HashSet;

use crate::content::schema::{Cover, ReportContent, SectionBlock, TableContent};
use crate::document::style::Stylesheet;
use crate::error::{Severity, ValidationIssue};

/// Result of content validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent rendering).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors followed by warnings.
    #[must_use]
    pub fn issues(&self) -> Vec<&ValidationIssue> {
        self.errors.iter().chain(&self.warnings).collect()
    }
}

/// Content validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    frame_width: f32,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `content` and returns every issue found.
    pub fn validate(&mut self, content: &ReportContent) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();
        self.frame_width = content.page.frame_width();

        self.validate_metadata(content);
        self.validate_page(content);
        self.validate_styles(content);
        self.validate_cover(&content.cover);
        self.validate_sections(content);

        if let Some(footer) = &content.footer {
            if footer.text.trim().is_empty() {
                self.add_error("footer.text", "Footer text cannot be empty");
            }
            self.check_gap("footer.space_before", footer.space_before);
        }

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Report-level checks
    // ========================================================================

    fn validate_metadata(&mut self, content: &ReportContent) {
        if content.id.trim().is_empty() {
            self.add_error("id", "Report id is required and cannot be empty");
        } else if content.id.contains(|c: char| c.is_whitespace() || c == '/') {
            self.add_error("id", "Report id cannot contain whitespace or '/'");
        }
        if content.title.trim().is_empty() {
            self.add_error("title", "Report title is required and cannot be empty");
        }
        if content.output.as_ref().is_some_and(|o| o.trim().is_empty()) {
            self.add_error("output", "Output file name cannot be empty");
        }
    }

    fn validate_page(&mut self, content: &ReportContent) {
        if let Err(e) = content.page.check() {
            self.add_error("page", &e.to_string());
        }
    }

    fn validate_styles(&mut self, content: &ReportContent) {
        let sheet = Stylesheet::default().with_overrides(&content.styles);
        for (name, style) in [
            ("title", &sheet.title),
            ("heading1", &sheet.heading1),
            ("heading2", &sheet.heading2),
            ("body", &sheet.body),
            ("footer", &sheet.footer),
        ] {
            if let Err(e) = style.check() {
                self.add_error(&format!("styles.{name}"), &e.to_string());
            }
        }
    }

    fn validate_cover(&mut self, cover: &Cover) {
        if cover.titles.is_empty() {
            self.add_warning("cover.titles", "Cover has no title lines");
        }
        for (i, title) in cover.titles.iter().enumerate() {
            if title.trim().is_empty() {
                self.add_error(&format!("cover.titles[{i}]"), "Title line cannot be empty");
            }
        }
        self.check_gap("cover.space_before", cover.space_before);
        self.check_gap("cover.space_after_titles", cover.space_after_titles);
        self.check_gap("cover.space_after", cover.space_after);

        if !cover.metadata.is_empty() {
            if cover.metadata_widths.len() != 2 {
                self.add_error(
                    "cover.metadata_widths",
                    &format!(
                        "Metadata table needs 2 column widths, found {}",
                        cover.metadata_widths.len()
                    ),
                );
            }
            self.check_widths("cover.metadata_widths", &cover.metadata_widths);
            if !(cover.metadata_font_size.is_finite() && cover.metadata_font_size > 0.0) {
                self.add_error(
                    "cover.metadata_font_size",
                    "Metadata font size must be positive",
                );
            }
        }
    }

    // ========================================================================
    // Sections
    // ========================================================================

    fn validate_sections(&mut self, content: &ReportContent) {
        if content.sections.is_empty() {
            self.add_error("sections", "Report must have at least one section");
            return;
        }

        let mut seen = HashSet::new();
        for (i, section) in content.sections.iter().enumerate() {
            let path = format!("sections[{i}]");
            let heading = section.heading.trim();
            if heading.is_empty() {
                self.add_error(&format!("{path}.heading"), "Section heading cannot be empty");
            } else if !seen.insert(heading) {
                self.add_warning(
                    &format!("{path}.heading"),
                    &format!("Duplicate section heading '{heading}'"),
                );
            }
            for (j, block) in section.blocks.iter().enumerate() {
                self.validate_block(block, &format!("{path}.blocks[{j}]"));
            }
        }
    }

    fn validate_block(&mut self, block: &SectionBlock, path: &str) {
        match block {
            SectionBlock::Paragraph { text } | SectionBlock::Subheading { text } => {
                if text.trim().is_empty() {
                    self.add_error(path, &format!("{} text cannot be empty", block.kind()));
                }
            }
            SectionBlock::Bullets { items } | SectionBlock::Checklist { items } => {
                if items.is_empty() {
                    self.add_error(path, &format!("{} list has no items", block.kind()));
                }
                for (k, item) in items.iter().enumerate() {
                    if item.trim().is_empty() {
                        self.add_error(&format!("{path}.items[{k}]"), "List item cannot be empty");
                    }
                }
            }
            SectionBlock::Definitions { items } => {
                if items.is_empty() {
                    self.add_error(path, "definitions list has no items");
                }
                for (k, item) in items.iter().enumerate() {
                    if item.term.trim().is_empty() {
                        self.add_error(
                            &format!("{path}.items[{k}].term"),
                            "Definition term cannot be empty",
                        );
                    }
                }
            }
            SectionBlock::Table(table) => self.validate_table(table, path),
            SectionBlock::Spacer { height } => self.check_gap(&format!("{path}.height"), *height),
        }
    }

    fn validate_table(&mut self, table: &TableContent, path: &str) {
        let columns = table.widths.len();
        if columns == 0 {
            self.add_error(&format!("{path}.widths"), "Table needs at least one column");
            return;
        }
        self.check_widths(&format!("{path}.widths"), &table.widths);

        if table.header.len() != columns {
            self.add_error(
                &format!("{path}.header"),
                &format!(
                    "Header has {} cells but the table has {columns} columns",
                    table.header.len()
                ),
            );
        }
        for (r, row) in table.rows.iter().enumerate() {
            if row.len() != columns {
                self.add_error(
                    &format!("{path}.rows[{r}]"),
                    &format!("Row has {} cells but the table has {columns} columns", row.len()),
                );
            }
        }
        if table.rows.is_empty() {
            self.add_warning(&format!("{path}.rows"), "Table has a header but no rows");
        }
        if let Some(padding) = table.header_padding {
            self.check_gap(&format!("{path}.header_padding"), padding);
        }

        let width: f32 = table.widths.iter().sum();
        if width > self.frame_width + 0.01 {
            self.add_warning(
                &format!("{path}.widths"),
                &format!(
                    "Table is {width:.1}pt wide but the printable frame is {:.1}pt",
                    self.frame_width
                ),
            );
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn check_gap(&mut self, path: &str, value: f32) {
        if !(value.is_finite() && value >= 0.0) {
            self.add_error(path, &format!("Spacing must be a non-negative number, got {value}"));
        }
    }

    fn check_widths(&mut self, path: &str, widths: &[f32]) {
        for (i, w) in widths.iter().enumerate() {
            if !(w.is_finite() && *w > 0.0) {
                self.add_error(
                    &format!("{path}[{i}]"),
                    &format!("Column width must be positive, got {w}"),
                );
            }
        }
    }

    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::schema::{Definition, Footer, Section};
    use crate::document::PageGeometry;
    use crate::document::style::StyleOverrides;

    fn minimal() -> ReportContent {
        ReportContent {
            id: "demo".to_string(),
            title: "Demo".to_string(),
            output: None,
            page: PageGeometry::default(),
            styles: StyleOverrides::default(),
            cover: Cover {
                space_before: 0.0,
                titles: vec!["Demo".to_string()],
                space_after_titles: 0.0,
                metadata: vec![["Version:".to_string(), "1.0".to_string()]],
                metadata_widths: vec![108.0, 324.0],
                metadata_font_size: 10.0,
                page_break_after: false,
                space_after: 0.0,
            },
            sections: vec![Section {
                heading: "Summary".to_string(),
                break_before: false,
                blocks: vec![SectionBlock::Paragraph {
                    text: "Hello".to_string(),
                }],
            }],
            footer: None,
        }
    }

    fn table(widths: Vec<f32>, header: &[&str], rows: &[&[&str]]) -> SectionBlock {
        SectionBlock::Table(TableContent {
            widths,
            header: header.iter().map(ToString::to_string).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(ToString::to_string).collect())
                .collect(),
            header_padding: None,
        })
    }

    #[test]
    fn test_validate_minimal_content() {
        let result = Validator::new().validate(&minimal());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_id_and_title() {
        let mut content = minimal();
        content.id = String::new();
        content.title = "  ".to_string();
        let result = Validator::new().validate(&content);
        let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["id", "title"]);
    }

    #[test]
    fn test_validate_no_sections() {
        let mut content = minimal();
        content.sections.clear();
        let result = Validator::new().validate(&content);
        assert!(result.has_errors());
        assert_eq!(result.errors[0].path, "sections");
    }

    #[test]
    fn test_validate_ragged_table() {
        let mut content = minimal();
        content.sections[0].blocks.push(table(
            vec![100.0, 100.0],
            &["Parameter", "Value"],
            &[&["Epochs", "25"], &["Optimizer"]],
        ));
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "sections[0].blocks[1].rows[1]");
        assert!(result.errors[0].message.contains("1 cells"));
    }

    #[test]
    fn test_validate_header_width_mismatch() {
        let mut content = minimal();
        content.sections[0]
            .blocks
            .push(table(vec![100.0], &["a", "b"], &[&["x"]]));
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors[0].path, "sections[0].blocks[1].header");
    }

    #[test]
    fn test_validate_non_positive_width() {
        let mut content = minimal();
        content.sections[0]
            .blocks
            .push(table(vec![0.0, -5.0], &["a", "b"], &[&["x", "y"]]));
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_wide_table_warns() {
        let mut content = minimal();
        content.sections[0]
            .blocks
            .push(table(vec![300.0, 300.0], &["a", "b"], &[&["x", "y"]]));
        let result = Validator::new().validate(&content);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("printable frame"));
    }

    #[test]
    fn test_validate_duplicate_headings_warn() {
        let mut content = minimal();
        content.sections.push(content.sections[0].clone());
        let result = Validator::new().validate(&content);
        assert!(result.is_valid());
        assert_eq!(result.warnings[0].path, "sections[1].heading");
    }

    #[test]
    fn test_validate_empty_blocks() {
        let mut content = minimal();
        content.sections[0].blocks = vec![
            SectionBlock::Bullets { items: vec![] },
            SectionBlock::Checklist {
                items: vec![" ".to_string()],
            },
            SectionBlock::Definitions {
                items: vec![Definition {
                    term: String::new(),
                    description: "d".to_string(),
                }],
            },
            SectionBlock::Spacer { height: -1.0 },
        ];
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn test_validate_bad_style_override() {
        let mut content = minimal();
        content.styles.body = Some(crate::document::style::StyleOverride {
            font_size: Some(0.0),
            ..Default::default()
        });
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors[0].path, "styles.body");
    }

    #[test]
    fn test_validate_empty_footer() {
        let mut content = minimal();
        content.footer = Some(Footer {
            space_before: 36.0,
            text: String::new(),
        });
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors[0].path, "footer.text");
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut content = minimal();
        content.id = String::new();
        content.cover.titles = vec![String::new()];
        content.sections[0].heading = String::new();
        let result = Validator::new().validate(&content);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.issues().len(), 3);
    }
}

//! Report content: schema, loading and validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ContentLimits, LoadResult, load_file, load_from_str};
pub use schema::{ReportContent, Section, SectionBlock};
pub use validation::{ValidationResult, Validator};

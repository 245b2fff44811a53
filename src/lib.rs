//! `endoreport` - static PDF reports for the GI endoscopy project
//!
//! Report content lives in YAML (two reports are embedded in the binary).
//! Content is composed into an ordered block list, laid out onto A4
//! pages and written as PDF, Markdown or a JSON outline.

pub mod cli;
pub mod compose;
pub mod content;
pub mod document;
pub mod error;
pub mod generate;
pub mod layout;
pub mod observability;
pub mod render;
pub mod reports;

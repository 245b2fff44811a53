//! Observability module
//!
//! Logging setup shared by every `endoreport` command.

pub mod logging;

pub use logging::init_logging;

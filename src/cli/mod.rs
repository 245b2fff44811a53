//! Command-line interface
//!
//! Argument definitions and command handlers for the `endoreport` binary.

pub mod args;
pub mod commands;

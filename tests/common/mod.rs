//! Shared integration-test harness for running the `endoreport` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Date pinned in every generated document so outputs are comparable.
pub const PINNED_DATE: &str = "2026-10-19";

/// Helpers around the compiled `endoreport` binary.
pub struct EndoReport;

impl EndoReport {
    /// Runs the binary with `args` in the crate root and waits for it.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(args: &[&str]) -> Output {
        Self::run_in(Path::new(env!("CARGO_MANIFEST_DIR")), args)
    }

    /// Runs the binary with `args` in `dir`.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_endoreport"))
            .args(args)
            .current_dir(dir)
            .env_remove("ENDOREPORT_DATE")
            .env_remove("ENDOREPORT_OUTPUT_DIR")
            .env_remove("ENDOREPORT_LOG_LEVEL")
            .env("ENDOREPORT_COLOR", "never")
            .output()
            .expect("failed to spawn endoreport")
    }

    /// Absolute path of a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Fixture path as a `&str`-friendly `String`.
    pub fn fixture(name: &str) -> String {
        Self::fixture_path(name).to_string_lossy().into_owned()
    }
}

/// Lossy stdout of a finished process.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished process.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

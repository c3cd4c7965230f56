//! Shared testing utilities for droidgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `droidgen` binary inside
    /// the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("droidgen").expect("Failed to locate droidgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Scaffold a project skeleton via the `app` subcommand.
    pub fn scaffold_app(&self, name: &str, package: &str) {
        self.cli().args(["app", name, package]).assert().success();
    }

    /// Read a root-relative file as text.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    /// Whether a root-relative path exists.
    pub fn exists(&self, rel: &str) -> bool {
        self.work_dir.join(rel).exists()
    }

    /// Count occurrences of `needle` in a root-relative file.
    pub fn count_in(&self, rel: &str, needle: &str) -> usize {
        self.read(rel).matches(needle).count()
    }
}

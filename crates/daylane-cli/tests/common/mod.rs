//! Common utilities for CLI E2E tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Isolated HOME plus a place for event fixtures.
pub struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create temp home"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Write `content` to a file inside the sandbox and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Invoke the CLI and return (stdout, stderr, exit code).
    pub fn run_cli(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_daylane"))
            .args(args)
            .env("HOME", self.home.path())
            .env_remove("DAYLANE_ENV")
            .env_remove("DAYLANE_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    /// Invoke the CLI and expect success.
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run_cli(args);
        if code != 0 && !stderr.is_empty() {
            eprintln!("CLI error output: {}", stderr);
        }
        assert_eq!(code, 0, "CLI command failed with code {}: {:?}", code, args);
        stdout
    }

    /// Invoke the CLI and expect failure.
    pub fn run_cli_failure(&self, args: &[&str]) -> (String, String, i32) {
        let (stdout, stderr, code) = self.run_cli(args);
        assert!(code != 0, "CLI command unexpectedly succeeded: {:?}", args);
        (stdout, stderr, code)
    }
}

/// Parse JSON output from CLI.
pub fn parse_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> T {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

/// Check if string contains substring
pub fn assert_contains(haystack: &str, needle: &str) {
    assert!(
        haystack.contains(needle),
        "Expected '{}' to contain '{}'",
        haystack, needle
    );
}

pub const MONDAY_EVENTS: &str = r##"[
  {"id": "A", "title": "Planning", "start": "2024-05-13T09:00:00Z", "end": "2024-05-13T10:00:00Z"},
  {"id": "B", "start": "2024-05-13T09:30:00Z", "end": "2024-05-13T10:30:00Z", "color": "#ef4444"},
  {"id": "C", "start": "2024-05-13T14:00:00Z", "end": "2024-05-13T15:00:00Z"},
  {"id": "D", "start": "2024-05-14T09:00:00Z", "end": "2024-05-14T09:30:00Z"}
]"##;

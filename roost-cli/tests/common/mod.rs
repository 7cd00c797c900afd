//! Common test utilities for CLI integration tests.
//!
//! Every `TestEnv` owns a temporary directory with its own data directory,
//! runs the binary from inside it so no stray `roost.yaml` is picked up, and
//! pins today to 2024-12-01.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// The date every command treats as today.
pub const TODAY: &str = "2024-12-01";

/// Environment variables that would leak host configuration into tests.
const ISOLATED_ENV: [&str; 6] = [
    "ROOST_DATA_DIR",
    "ROOST_BUSY_TIMEOUT",
    "ROOST_LOG_MODE",
    "ROOST_UPDATE_OVERLAP",
    "ROOST_MAXIMUM_LOCK_WAIT_SECONDS",
    "ROOST_DISABLE_AUTOINIT",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the roost data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("roost-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The binary with a clean environment and nothing else.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roost").expect("Failed to find roost binary");
        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// The binary with `--data-dir` and `--today` set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir).arg("--today").arg(TODAY);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Registers the standard host (100 weekdays, 150 weekends) and guest.
    pub fn seed(&self) {
        self.command()
            .args([
                "add-host",
                "--id",
                "host-1",
                "--email",
                "host@example.com",
                "--standard-rate",
                "100",
                "--weekend-rate",
                "150",
            ])
            .assert()
            .success();
        self.command()
            .args(["add-guest", "--id", "1", "--email", "guest@example.com"])
            .assert()
            .success();
    }

    /// Books a stay for the standard host and guest and returns its id.
    ///
    /// # Panics
    /// Panics if the reserve command fails.
    pub fn reserve(&self, start: &str, end: &str) -> u32 {
        let output = self
            .command()
            .args([
                "reserve",
                "--host",
                "host@example.com",
                "--guest",
                "guest@example.com",
                "--start",
                start,
                "--end",
                end,
            ])
            .output()
            .expect("Failed to run reserve command");

        assert!(
            output.status.success(),
            "Reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not a reservation id")
    }

    /// Runs `list` for the standard host in the given format.
    pub fn list(&self, format: &str) -> String {
        let output = self
            .command()
            .args(["list", "--host", "host@example.com", "--format", format])
            .output()
            .expect("Failed to run list command");
        assert!(output.status.success());
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

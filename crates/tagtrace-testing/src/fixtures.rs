//! Shared integration-test fixture.
//!
//! Gives every test an isolated data directory and log root inside a temp
//! dir, plus a preconfigured `tagtrace` command pointing at them.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    log_root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tagtrace");
        let log_root = temp_dir.path().join("logs");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&log_root).expect("Failed to create log dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            log_root,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_root(&self) -> &Path {
        &self.log_root
    }

    /// A `tagtrace` command isolated to this fixture's data dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tagtrace").expect("tagtrace binary should build");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Write a file under the fixture's log root.
    pub fn write_log(&self, name: &str, content: &str) -> PathBuf {
        let path = self.log_root.join(name);
        fs::write(&path, content).expect("Failed to write log fixture");
        path
    }

    /// Write a config.toml into the fixture's data dir.
    pub fn write_config(&self, content: &str) {
        fs::write(self.data_dir.join("config.toml"), content).expect("Failed to write config");
    }
}

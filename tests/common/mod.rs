#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const OVERRIDE_VARS: [&str; 3] = ["DSHPC_SUM__A", "DSHPC_SUM__B", "DSHPC_GREETING__NAME"];

/// Command for one of the crate binaries with a clean environment for overrides and logging.
pub fn test_command(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    for var in OVERRIDE_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

pub struct ConfigFixture {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFixture {
    pub fn new(file_name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(file_name);
        fs::write(&path, content).unwrap();

        Self { temp_dir, path }
    }

    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

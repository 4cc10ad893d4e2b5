//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const STUB: &str = "sl7-prof-e28-p056";

/// Isolated Muse workspace.
///
/// Each test gets its own temporary work directory. Commands run with a
/// cleared environment holding only the Muse variables.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn work_dir(&self) -> &Path {
    self.temp.path()
  }

  pub fn work_dir_str(&self) -> String {
    self.work_dir().to_string_lossy().to_string()
  }

  /// `<work_dir>/build/<stub>`
  pub fn build_root(&self) -> PathBuf {
    self.work_dir().join("build").join(STUB)
  }

  /// Write a file relative to the work directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.work_dir().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Get a pre-configured Command for the muse-env binary.
  ///
  /// Sets the required Muse variables for a prof build of `Offline`.
  pub fn muse_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("muse-env");
    cmd.env_clear();
    cmd.env("MUSE_WORK_DIR", self.work_dir());
    cmd.env("MUSE_STUB", STUB);
    cmd.env("MUSE_REPOS", "Offline");
    cmd.env("MUSE_BUILD", "prof");
    cmd.env("MUSE_G4VIS", "");
    cmd.env("MUSE_G4ST", "");
    cmd.env("MUSE_G4VG", "");
    cmd.env("MUSE_TRIGGER", "");
    cmd
  }
}

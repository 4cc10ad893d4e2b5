//! The build configuration mapping derived from the Muse environment.
//!
//! Everything else in the crate starts from a [`BuildOptions`]. It is read once
//! per invocation and never mutated afterwards.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::consts::vars;
use crate::env::{self, EnvError};

/// An on/off feature switch, serialized as the lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
  On,
  Off,
}

impl Toggle {
  fn on_if(condition: bool) -> Self {
    if condition { Toggle::On } else { Toggle::Off }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Toggle::On => "on",
      Toggle::Off => "off",
    }
  }
}

impl fmt::Display for Toggle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Optimization mode selected through `MUSE_BUILD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildMode {
  Prof,
  Debug,
  /// Any other value. Adds no mode-specific flags.
  Other(String),
}

impl BuildMode {
  pub fn parse(value: &str) -> Self {
    match value {
      "prof" => BuildMode::Prof,
      "debug" => BuildMode::Debug,
      other => BuildMode::Other(other.to_string()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
  /// Directory holding the local repos and the `build` area.
  #[serde(rename = "workDir")]
  pub work_dir: String,
  /// `build/<stub>`, relative to the work directory.
  #[serde(rename = "buildBase")]
  pub build_base: String,
  pub tmpdir: String,
  pub libdir: String,
  pub bindir: String,
  pub gendir: String,
  /// Repos in link order, whitespace separated, as given by Muse.
  pub repos: String,
  /// Raw build mode text, usually `prof` or `debug`.
  pub build: String,
  pub g4vis: String,
  pub g4mt: Toggle,
  pub g4vg: Toggle,
  pub trigger: Toggle,
  /// Set when building against a Spack environment.
  pub spack: bool,
}

impl BuildOptions {
  /// Read the configuration from the process environment.
  ///
  /// # Errors
  ///
  /// Returns [`EnvError::Missing`] naming the first required variable that is
  /// not set.
  pub fn from_env() -> Result<Self, EnvError> {
    let work_dir = env::required(vars::MUSE_WORK_DIR)?;
    let build_base = format!("build/{}", env::required(vars::MUSE_STUB)?);
    let repos = env::required(vars::MUSE_REPOS)?;
    let build = env::required(vars::MUSE_BUILD)?;

    let g4vis = env::required(vars::MUSE_G4VIS)?;
    let g4vis = if g4vis.is_empty() { "none".to_string() } else { g4vis };
    let g4mt = Toggle::on_if(env::required(vars::MUSE_G4ST)?.is_empty());
    let g4vg = Toggle::on_if(!env::required(vars::MUSE_G4VG)?.is_empty());
    let trigger = Toggle::on_if(!env::required(vars::MUSE_TRIGGER)?.is_empty());
    let spack = env::is_set(vars::MU2E_SPACK);

    Ok(Self {
      tmpdir: format!("{}/tmp", build_base),
      libdir: format!("{}/lib", build_base),
      bindir: format!("{}/bin", build_base),
      gendir: format!("{}/gen", build_base),
      work_dir,
      build_base,
      repos,
      build,
      g4vis,
      g4mt,
      g4vg,
      trigger,
      spack,
    })
  }

  pub fn build_mode(&self) -> BuildMode {
    BuildMode::parse(&self.build)
  }

  /// Distinct repo names. Duplicates in `MUSE_REPOS` collapse.
  pub fn repo_set(&self) -> BTreeSet<&str> {
    self.repos.split_whitespace().collect()
  }

  /// Absolute root of the build output tree.
  pub fn build_root(&self) -> PathBuf {
    PathBuf::from(&self.work_dir).join(&self.build_base)
  }

  /// Library directory a local repo builds into, spelled exactly as Muse puts
  /// it on `MUSE_LIBRARY_PATH`.
  pub fn local_lib_dir(&self, repo: &str) -> String {
    format!("{}/{}/{}/lib", self.work_dir, self.build_base, repo)
  }
}

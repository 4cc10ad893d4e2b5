//! RPATH selection for linked libraries and executables.
//!
//! Only applies to Spack builds. Each `MUSE_LIBRARY_PATH` entry that is the lib
//! directory of a repo built in this workspace becomes an `$ORIGIN`-relative
//! RPATH, so local cross-repo links survive moving the build area. Everything
//! else is baked in as an absolute path, with a warning when that path is not
//! on cvmfs and so may be missing on grid worker nodes.
//!
//! Local repos are recognized by exact string comparison against
//! `<workDir>/<buildBase>/<repo>/lib`. No normalization is done: a trailing
//! slash or a symlinked spelling of the same directory counts as external.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::consts::{CVMFS_MOUNT, vars};
use crate::env::{self, EnvError};
use crate::options::BuildOptions;

/// Loader origin, escaped so it reaches the linker intact through the build
/// tool's shell.
pub const ORIGIN: &str = "\\$ORIGIN";

/// One RPATH value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpathEntry {
  /// Sibling repo lib directory, relative to the artifact being linked.
  Origin { repo: String },
  /// Absolute directory outside the workspace.
  Absolute(String),
}

impl fmt::Display for RpathEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RpathEntry::Origin { repo } => write!(f, "{}/../../{}/lib", ORIGIN, repo),
      RpathEntry::Absolute(path) => f.write_str(path),
    }
  }
}

impl Serialize for RpathEntry {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// An absolute RPATH entry that will not resolve on grid nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonRelocatable {
  pub path: String,
}

impl NonRelocatable {
  pub const HEADLINE: &'static str = "Warning RPATH not on cvmfs, may not work for grid jobs";
}

impl fmt::Display for NonRelocatable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}\n    {}", Self::HEADLINE, self.path)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rpaths {
  pub entries: Vec<RpathEntry>,
  pub warnings: Vec<NonRelocatable>,
}

impl Rpaths {
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries wrapped for the compiler driver: `-Wl,-rpath,<entry>`.
  pub fn linker_flags(&self) -> impl Iterator<Item = String> + '_ {
    self.entries.iter().map(|entry| format!("-Wl,-rpath,{}", entry))
  }
}

/// Decides the RPATH form for each library search directory.
#[derive(Debug, Clone)]
pub struct RpathPolicy<'a> {
  opts: &'a BuildOptions,
  local_repos: Vec<&'a str>,
}

impl<'a> RpathPolicy<'a> {
  /// `local_repos` is the whitespace-separated `MUSE_LOCAL_REPOS` value.
  pub fn new(opts: &'a BuildOptions, local_repos: Option<&'a str>) -> Self {
    Self {
      opts,
      local_repos: local_repos.map(|r| r.split_whitespace().collect()).unwrap_or_default(),
    }
  }

  /// The local repo whose build lib directory is exactly `dir`, if any.
  pub fn local_repo(&self, dir: &str) -> Option<&'a str> {
    self
      .local_repos
      .iter()
      .rev()
      .find(|repo| self.opts.local_lib_dir(repo) == dir)
      .copied()
  }

  pub fn classify(&self, dir: &str) -> RpathEntry {
    match self.local_repo(dir) {
      Some(repo) => RpathEntry::Origin { repo: repo.to_string() },
      None => RpathEntry::Absolute(dir.to_string()),
    }
  }

  /// Apply the policy to a colon-separated search path.
  pub fn collect(&self, search_path: Option<&str>) -> Rpaths {
    let mut rpaths = Rpaths::default();
    if !self.opts.spack {
      debug!("not a spack build, no RPATH entries");
      return rpaths;
    }
    let Some(search_path) = search_path.filter(|p| !p.is_empty()) else {
      return rpaths;
    };

    for dir in search_path.split(':') {
      let entry = self.classify(dir);
      if matches!(entry, RpathEntry::Absolute(_)) && !is_on_cvmfs(dir) {
        warn!(path = dir, "RPATH not on cvmfs, may not work for grid jobs");
        rpaths.warnings.push(NonRelocatable { path: dir.to_string() });
      }
      rpaths.entries.push(entry);
    }

    rpaths
  }
}

/// Whether the second `/`-separated segment of `path` is the cvmfs mount.
/// Paths with no second segment are treated as off cvmfs.
pub fn is_on_cvmfs(path: &str) -> bool {
  path.split('/').nth(1) == Some(CVMFS_MOUNT)
}

/// RPATH entries for the current environment.
pub fn collect_rpath(opts: &BuildOptions) -> Result<Rpaths, EnvError> {
  if !opts.spack {
    return Ok(Rpaths::default());
  }
  let local_repos = env::non_empty(vars::MUSE_LOCAL_REPOS)?;
  let search_path = env::non_empty(vars::MUSE_LIBRARY_PATH)?;
  Ok(RpathPolicy::new(opts, local_repos.as_deref()).collect(search_path.as_deref()))
}

//! Remove stale files from the build output tree.
//!
//! `scons -c` only deletes targets it still knows about. Objects built from a
//! source that has since been removed linger in the build directory and end
//! up in dictionaries and libraries, so the clean step wipes every file under
//! the build base except the [`BUILD_MARKER`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::BUILD_MARKER;
use crate::options::BuildOptions;
use crate::util::walk::{is_directory, walk_no_follow};

#[derive(Debug, Error)]
pub enum CleanupError {
  #[error("failed to walk {}: {source}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: io::Error },
}

#[derive(Debug, Default, Serialize)]
pub struct CleanupReport {
  pub removed: Vec<PathBuf>,
  pub dry_run: bool,
}

/// Sweep the build tree of the current configuration.
pub fn extra_cleanup<F>(opts: &BuildOptions, dry_run: bool, announce: F) -> Result<CleanupReport, CleanupError>
where
  F: FnMut(&Path),
{
  sweep_build_tree(&opts.build_root(), dry_run, announce)
}

/// Delete every non-directory entry below `root` other than the build marker.
///
/// `announce` sees each path before it is removed, so a failure partway
/// through leaves every deleted file already reported. Symlinks are removed
/// as links; symlinked directories are neither entered nor removed.
/// Directories themselves are left in place. A `root` that is missing or not
/// a directory is left alone. With `dry_run` the report lists what would go.
pub fn sweep_build_tree<F>(root: &Path, dry_run: bool, mut announce: F) -> Result<CleanupReport, CleanupError>
where
  F: FnMut(&Path),
{
  let mut report = CleanupReport {
    removed: Vec::new(),
    dry_run,
  };

  if !root.is_dir() {
    debug!(root = %root.display(), "build tree is not a directory, nothing to clean");
    return Ok(report);
  }

  for entry in walk_no_follow(root) {
    let entry = entry.map_err(|source| CleanupError::Walk {
      path: root.to_path_buf(),
      source,
    })?;
    if is_directory(&entry) || entry.file_name() == BUILD_MARKER {
      continue;
    }
    report.removed.push(entry.into_path());
  }

  for path in &report.removed {
    announce(path);
    if dry_run {
      continue;
    }
    debug!(path = %path.display(), "removing file");
    fs::remove_file(path).map_err(|source| CleanupError::Remove {
      path: path.clone(),
      source,
    })?;
  }

  info!(
    root = %root.display(),
    removed = report.removed.len(),
    dry_run,
    "build tree cleanup complete"
  );
  Ok(report)
}

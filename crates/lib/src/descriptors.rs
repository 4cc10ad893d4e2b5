//! Locate the `SConscript` files of the local repos.
//!
//! Repos that are symlinks (typically links into a backing release) are
//! skipped entirely, and the walk never descends through a symlinked
//! subdirectory, so only sources that live in the workspace are built.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::SCONSCRIPT;
use crate::options::BuildOptions;
use crate::util::walk::{is_directory, walk_no_follow};

#[derive(Debug, Error)]
pub enum LocateError {
  #[error("failed to inspect repo {}: {source}", path.display())]
  Inspect { path: PathBuf, source: io::Error },

  #[error("failed to walk {}: {source}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },
}

/// `SConscript` paths for the repos in `MUSE_REPOS`, relative to the work dir.
pub fn sconscript_list(opts: &BuildOptions) -> Result<Vec<PathBuf>, LocateError> {
  find_descriptors(Path::new(&opts.work_dir), &opts.repo_set())
}

/// Walk each repo under `work_dir` and collect every `SConscript`.
///
/// Results are relative to `work_dir`, e.g. `Offline/TrkReco/SConscript`.
/// A repo that does not exist, or is not a directory, contributes nothing.
pub fn find_descriptors(work_dir: &Path, repos: &BTreeSet<&str>) -> Result<Vec<PathBuf>, LocateError> {
  let mut found = Vec::new();

  for repo in repos {
    let root = work_dir.join(repo);
    match root.symlink_metadata() {
      Ok(meta) if meta.file_type().is_symlink() => {
        debug!(repo, "skipping symlinked repo");
        continue;
      }
      Ok(meta) if !meta.is_dir() => {
        debug!(repo, "repo is not a directory");
        continue;
      }
      Ok(_) => {}
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(repo, "repo not found in work dir");
        continue;
      }
      Err(source) => return Err(LocateError::Inspect { path: root, source }),
    }

    for entry in walk_no_follow(&root) {
      let entry = entry.map_err(|source| LocateError::Walk {
        path: root.clone(),
        source,
      })?;
      if entry.file_name() != SCONSCRIPT || is_directory(&entry) {
        continue;
      }
      let path = entry.path();
      found.push(path.strip_prefix(work_dir).unwrap_or(path).to_path_buf());
    }
  }

  debug!(count = found.len(), "located SConscript files");
  Ok(found)
}

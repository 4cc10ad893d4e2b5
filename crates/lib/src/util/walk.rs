//! Directory walking that never follows symbolic links.

use std::fs;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

/// Walker over `root` that lists symlinks as entries without descending into
/// them. Entries come out sorted by file name within each directory.
pub fn walk_no_follow(root: &Path) -> WalkDir {
  WalkDir::new(root).follow_links(false).sort_by_file_name()
}

/// Whether the entry names a directory, counting symlinks that point at one.
///
/// A walk lists symlinked directories without entering them. They are still
/// directories for the purpose of "is this a file".
pub fn is_directory(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  if file_type.is_dir() {
    return true;
  }
  file_type.is_symlink() && fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `path` itself is a symbolic link. Missing paths are not.
pub fn is_symlink(path: &Path) -> bool {
  path
    .symlink_metadata()
    .map(|m| m.file_type().is_symlink())
    .unwrap_or(false)
}

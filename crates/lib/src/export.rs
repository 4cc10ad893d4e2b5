//! Everything a build script needs, gathered into one serializable bundle.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::descriptors::{LocateError, sconscript_list};
use crate::env::EnvError;
use crate::flags::{FlagsError, merge_flags};
use crate::libs::{BABAR_LIBS, ROOT_LIBS};
use crate::options::BuildOptions;
use crate::osenv::exported_os_environment;
use crate::paths::{cpp_path, lib_path};
use crate::rpath::NonRelocatable;

#[derive(Debug, Error)]
pub enum ExportError {
  #[error(transparent)]
  Env(#[from] EnvError),

  #[error(transparent)]
  Flags(#[from] FlagsError),

  #[error(transparent)]
  Locate(#[from] LocateError),
}

#[derive(Debug, Serialize)]
pub struct BuildBundle {
  pub options: BuildOptions,
  pub cpp_path: Vec<String>,
  pub lib_path: Vec<String>,
  pub flags: Vec<String>,
  pub rpath_warnings: Vec<NonRelocatable>,
  pub sconscripts: Vec<PathBuf>,
  pub os_env: BTreeMap<String, String>,
  pub root_libs: Vec<&'static str>,
  pub babar_libs: Vec<&'static str>,
}

/// Derive the full bundle from the process environment.
pub fn collect_bundle() -> Result<BuildBundle, ExportError> {
  let options = BuildOptions::from_env()?;
  let merged = merge_flags(&options)?;

  Ok(BuildBundle {
    cpp_path: cpp_path(&options)?,
    lib_path: lib_path()?,
    flags: merged.flags,
    rpath_warnings: merged.rpath_warnings,
    sconscripts: sconscript_list(&options)?,
    os_env: exported_os_environment()?,
    root_libs: ROOT_LIBS.to_vec(),
    babar_libs: BABAR_LIBS.to_vec(),
    options,
  })
}

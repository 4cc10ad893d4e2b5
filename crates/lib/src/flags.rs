//! Compiler and linker flags handed to the build tool's flag merger.

use serde::Serialize;
use thiserror::Error;

use crate::consts::vars;
use crate::env::{self, EnvError};
use crate::options::{BuildMode, BuildOptions};
use crate::rpath::{NonRelocatable, Rpaths, collect_rpath};

pub const CXX17: &str = "-std=c++17";
pub const CXX20: &str = "-std=c++20";

/// First compiler qualifier number (`e27`) that builds with C++20.
pub const CXX20_QUALIFIER: i64 = 27;

/// Flags every build gets, after the language standard.
pub const BASE_FLAGS: &[&str] = &[
  "-Wall",
  "-Wno-unused-local-typedefs",
  "-g",
  "-Werror",
  "-pedantic",
  "-Wl,--no-undefined",
  "-gdwarf-2",
  "-Wl,--as-needed",
  "-Werror=return-type",
  "-Winit-self",
  "-Woverloaded-virtual",
];

pub const PROF_FLAGS: &[&str] = &["-O3", "-fno-omit-frame-pointer", "-DNDEBUG"];
pub const DEBUG_FLAGS: &[&str] = &["-O0"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagsError {
  #[error(transparent)]
  Env(#[from] EnvError),

  #[error("{var}={value:?} is not a compiler qualifier like e28")]
  CompilerQualifier { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerFlags {
  pub flags: Vec<String>,
  /// Absolute RPATH entries that were included but are off cvmfs.
  pub rpath_warnings: Vec<NonRelocatable>,
}

/// Language standard for a `MUSE_COMPILER_E` style qualifier such as `e28`.
pub fn language_standard(qualifier: Option<&str>) -> Result<&'static str, FlagsError> {
  let Some(qualifier) = qualifier.filter(|q| !q.is_empty()) else {
    return Ok(CXX17);
  };

  let mut chars = qualifier.chars();
  chars.next();
  let number: i64 = chars.as_str().trim().parse().map_err(|_| FlagsError::CompilerQualifier {
    var: vars::MUSE_COMPILER_E.to_string(),
    value: qualifier.to_string(),
  })?;

  Ok(if number >= CXX20_QUALIFIER { CXX20 } else { CXX17 })
}

pub fn mode_flags(mode: &BuildMode) -> &'static [&'static str] {
  match mode {
    BuildMode::Prof => PROF_FLAGS,
    BuildMode::Debug => DEBUG_FLAGS,
    BuildMode::Other(_) => &[],
  }
}

/// Assemble the flag list from already-resolved inputs.
///
/// `extra` is the whitespace-separated `MUSE_CPPFLAGS` text.
pub fn compose_flags(standard: &str, extra: Option<&str>, mode: &BuildMode, rpaths: &Rpaths) -> Vec<String> {
  let mut flags = vec![standard.to_string()];
  flags.extend(BASE_FLAGS.iter().map(|f| f.to_string()));
  if let Some(extra) = extra {
    flags.extend(extra.split_whitespace().map(str::to_string));
  }
  flags.extend(mode_flags(mode).iter().map(|f| f.to_string()));
  flags.extend(rpaths.linker_flags());
  flags
}

/// Compiler and linker flags for the current environment, RPATH flags last.
pub fn merge_flags(opts: &BuildOptions) -> Result<CompilerFlags, FlagsError> {
  let standard = language_standard(env::non_empty(vars::MUSE_COMPILER_E)?.as_deref())?;
  let extra = env::non_empty(vars::MUSE_CPPFLAGS)?;
  let rpaths = collect_rpath(opts)?;

  Ok(CompilerFlags {
    flags: compose_flags(standard, extra.as_deref(), &opts.build_mode(), &rpaths),
    rpath_warnings: rpaths.warnings,
  })
}

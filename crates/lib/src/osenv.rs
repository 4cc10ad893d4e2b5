//! Shell variables forwarded into the build tool's execution environment.

use std::collections::BTreeMap;

use tracing::debug;

use crate::env::{self, EnvError};

/// Variables copied when present.
pub const EXPORTED_VARS: &[&str] = &[
  "LD_LIBRARY_PATH",
  "GCC_FQ_DIR",
  "PATH",
  "PYTHONPATH",
  "ROOTSYS",
  "PYTHON_ROOT",
  "PYTHON_DIR",
  "SQLITE_FQ_DIR",
  "MUSE_WORK_DIR",
  "MUSE_BUILD_BASE",
];

/// The subset of [`EXPORTED_VARS`] that is set, by name.
pub fn exported_os_environment() -> Result<BTreeMap<String, String>, EnvError> {
  let mut osenv = BTreeMap::new();
  for var in EXPORTED_VARS {
    match env::optional(var)? {
      Some(value) => {
        osenv.insert(var.to_string(), value);
      }
      None => debug!(var, "not exported, unset"),
    }
  }
  Ok(osenv)
}

//! Compiler include path and linker library path assembly.
//!
//! Order is search precedence, so entries are appended exactly in the order
//! the dependencies are listed and nothing is deduplicated.

use crate::consts::vars;
use crate::env::{self, EnvError};
use crate::options::BuildOptions;

/// Include directories of the art suite and its dependencies, in search order.
const ART_SUITE_INCLUDES: &[&str] = &[
  "ART_INC",
  "ART_ROOT_IO_INC",
  "CANVAS_INC",
  "BTRK_INC",
  "KINKAL_INC",
  "MESSAGEFACILITY_INC",
  "FHICLCPP_INC",
  "HEP_CONCURRENCY_INC",
  "SQLITE_INC",
  "CETLIB_INC",
  "CETLIB_EXCEPT_INC",
];

const TAIL_INCLUDES: &[&str] = &["ARTDAQ_CORE_INC", "TRACE_INC", "GSL_INC", "POSTGRESQL_INC", "PYTHON_INCLUDE"];

struct IncludePath {
  dirs: Vec<String>,
}

impl IncludePath {
  fn required(&mut self, vars: &[&str]) -> Result<(), EnvError> {
    for var in vars {
      self.dirs.push(env::required(var)?);
    }
    Ok(())
  }

  fn optional(&mut self, var: &str) -> Result<bool, EnvError> {
    match env::optional(var)? {
      Some(dir) => {
        self.dirs.push(dir);
        Ok(true)
      }
      None => Ok(false),
    }
  }
}

/// Compiler include path for the current environment.
///
/// Starts with the work directory and any backing build areas. A
/// `MUSE_VIEW_INC` view replaces all per-product include directories.
///
/// # Errors
///
/// Fails on the first required include variable that is not set.
pub fn cpp_path(opts: &BuildOptions) -> Result<Vec<String>, EnvError> {
  let mut path = IncludePath {
    dirs: vec![opts.work_dir.clone()],
  };

  if let Some(backing) = env::non_empty(vars::MUSE_BACKING)? {
    path.dirs.extend(backing.split_whitespace().map(str::to_string));
  }

  if let Some(view) = env::non_empty(vars::MUSE_VIEW_INC)? {
    path.dirs.extend(view.split(':').map(str::to_string));
    return Ok(path.dirs);
  }

  path.required(ART_SUITE_INCLUDES)?;
  path.optional("NLOHMANN_JSON_INC")?;
  path.required(&["BOOST_INC", "CLHEP_INC"])?;
  if let Some(cppunit) = env::optional("CPPUNIT_DIR")? {
    path.dirs.push(format!("{}/include", cppunit));
  }
  path.optional("HEPPDT_INC")?;
  path.required(&["ROOT_INC"])?;
  path.optional("OPENBLAS_INC")?;
  path.required(&["XERCES_C_INC", "TBB_INC"])?;

  // older setups still export the mu2e-prefixed name
  if !path.optional("MU2E_ARTDAQ_CORE_INC")? {
    path.required(&["ARTDAQ_CORE_MU2E_INC"])?;
  }
  if !path.optional("PCIE_LINUX_KERNEL_MODULE_INC")? {
    path.optional("MU2E_PCIE_UTILS_INC")?;
  }

  path.required(TAIL_INCLUDES)?;

  Ok(path.dirs)
}

/// Linker search path: `LD_LIBRARY_PATH` followed by `MUSE_LIBRARY_PATH`.
pub fn lib_path() -> Result<Vec<String>, EnvError> {
  let mut path = Vec::new();
  for var in [vars::LD_LIBRARY_PATH, vars::MUSE_LIBRARY_PATH] {
    if let Some(value) = env::optional(var)? {
      path.extend(value.split(':').map(str::to_string));
    }
  }
  Ok(path)
}

//! Implementation of the `muse-env cpp-path` and `muse-env lib-path` commands.

use anyhow::{Context, Result};

use muse_lib::paths::{cpp_path, lib_path};

use crate::output::{OutputFormat, print_json, print_list};

use super::load_options;

pub fn cmd_cpp_path(output: OutputFormat) -> Result<()> {
  let opts = load_options()?;
  let path = cpp_path(&opts).context("Failed to assemble the include path")?;
  emit(&path, output)
}

pub fn cmd_lib_path(output: OutputFormat) -> Result<()> {
  let path = lib_path().context("Failed to assemble the library path")?;
  emit(&path, output)
}

fn emit(path: &[String], output: OutputFormat) -> Result<()> {
  if output.is_json() {
    print_json(&path)
  } else {
    print_list(path);
    Ok(())
  }
}

//! Implementation of the `muse-env rpath` command.

use anyhow::{Context, Result};

use muse_lib::rpath::collect_rpath;

use crate::output::{OutputFormat, print_json, print_list, print_rpath_warnings};

use super::load_options;

pub fn cmd_rpath(output: OutputFormat) -> Result<()> {
  let opts = load_options()?;
  let rpaths = collect_rpath(&opts).context("Failed to collect RPATH entries")?;

  if output.is_json() {
    return print_json(&rpaths);
  }

  print_rpath_warnings(&rpaths.warnings);
  print_list(&rpaths.entries);
  Ok(())
}

//! Implementation of the `muse-env flags` command.

use anyhow::{Context, Result};

use muse_lib::flags::merge_flags;

use crate::output::{OutputFormat, print_json, print_list, print_rpath_warnings};

use super::load_options;

pub fn cmd_flags(output: OutputFormat) -> Result<()> {
  let opts = load_options()?;
  let merged = merge_flags(&opts).context("Failed to compose compiler flags")?;

  if output.is_json() {
    return print_json(&merged);
  }

  print_rpath_warnings(&merged.rpath_warnings);
  print_list(&merged.flags);
  Ok(())
}

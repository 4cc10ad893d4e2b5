//! Implementation of the `muse-env sconscripts` command.

use anyhow::{Context, Result};

use muse_lib::descriptors::sconscript_list;

use crate::output::{OutputFormat, print_json, print_list};

use super::load_options;

pub fn cmd_sconscripts(output: OutputFormat) -> Result<()> {
  let opts = load_options()?;
  let scripts = sconscript_list(&opts).context("Failed to locate SConscript files")?;

  if output.is_json() {
    print_json(&scripts)
  } else {
    print_list(scripts.iter().map(|p| p.display()));
    Ok(())
  }
}

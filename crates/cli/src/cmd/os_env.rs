//! Implementation of the `muse-env os-env` command.

use anyhow::{Context, Result};

use muse_lib::osenv::exported_os_environment;

use crate::output::{OutputFormat, print_json};

pub fn cmd_os_env(output: OutputFormat) -> Result<()> {
  let osenv = exported_os_environment().context("Failed to read the exported environment")?;

  if output.is_json() {
    return print_json(&osenv);
  }

  for (name, value) in &osenv {
    println!("{}={}", name, value);
  }
  Ok(())
}

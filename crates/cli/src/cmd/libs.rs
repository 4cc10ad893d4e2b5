//! Implementation of the `muse-env libs` command.

use anyhow::Result;
use clap::ValueEnum;

use muse_lib::libs::{BABAR_LIBS, ROOT_LIBS};

use crate::output::{OutputFormat, print_json, print_list};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LibSet {
  /// ROOT libraries
  Root,
  /// BaBar tracking (BTrk) libraries
  Babar,
}

pub fn cmd_libs(set: LibSet, output: OutputFormat) -> Result<()> {
  let libs = match set {
    LibSet::Root => ROOT_LIBS,
    LibSet::Babar => BABAR_LIBS,
  };

  if output.is_json() {
    print_json(&libs)
  } else {
    print_list(libs);
    Ok(())
  }
}

//! Implementation of the `muse-env export` command.
//!
//! Emits options, paths, flags, SConscript list, exported environment and
//! library lists as one JSON document, so an SConstruct needs a single call.

use anyhow::{Context, Result};

use muse_lib::export::collect_bundle;

use crate::output::print_json;

pub fn cmd_export() -> Result<()> {
  let bundle = collect_bundle().context("Failed to collect build settings")?;
  print_json(&bundle)
}

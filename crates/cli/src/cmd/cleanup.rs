//! Implementation of the `muse-env cleanup` command.
//!
//! Run after `scons -c` to drop objects whose sources no longer exist.

use anyhow::{Context, Result};

use muse_lib::cleanup::extra_cleanup;

use crate::output::{OutputFormat, print_json, print_success};

use super::load_options;

pub fn cmd_cleanup(dry_run: bool, output: OutputFormat) -> Result<()> {
  let opts = load_options()?;
  let verb = if dry_run { "would remove file" } else { "removing file " };
  let text = !output.is_json();
  let report = extra_cleanup(&opts, dry_run, |path| {
    if text {
      println!("{} {}", verb, path.display());
    }
  })
  .with_context(|| format!("Failed to clean {}", opts.build_root().display()))?;

  if output.is_json() {
    return print_json(&report);
  }

  if dry_run {
    print_success(&format!("{} file(s) would be removed", report.removed.len()));
  } else {
    print_success(&format!("Removed {} file(s)", report.removed.len()));
  }

  Ok(())
}

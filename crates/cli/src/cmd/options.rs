//! Implementation of the `muse-env options` command.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::output::{OutputFormat, print_json};

use super::load_options;

pub fn cmd_options(output: OutputFormat) -> Result<()> {
  let opts = load_options()?;

  if output.is_json() {
    return print_json(&opts);
  }

  // key=value lines, strings unquoted
  if let Value::Object(fields) = serde_json::to_value(&opts).context("Failed to serialize build options")? {
    for (key, value) in fields {
      match value {
        Value::String(s) => println!("{}={}", key, s),
        other => println!("{}={}", key, other),
      }
    }
  }

  Ok(())
}

//! CLI output formatting utilities.
//!
//! Data goes to stdout one item per line (or as JSON) so build scripts can
//! capture it. Errors go to stderr.

use std::fmt::Display;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use muse_lib::rpath::NonRelocatable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

/// Print each item on its own line.
pub fn print_list<T: Display>(items: impl IntoIterator<Item = T>) {
  for item in items {
    println!("{}", item);
  }
}

/// RPATH portability warnings, two lines each, on stdout.
pub fn print_rpath_warnings(warnings: &[NonRelocatable]) {
  for warning in warnings {
    println!("{}", warning);
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

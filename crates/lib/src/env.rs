//! Process environment lookups.
//!
//! Three flavors cover every read the crate makes: variables that must exist,
//! variables whose mere presence matters, and variables that only count when
//! they hold a non-empty value.

use std::env::{self, VarError};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
  #[error("required environment variable {var} is not set")]
  Missing { var: String },

  #[error("environment variable {var} is not valid unicode")]
  NotUnicode { var: String },
}

/// Read a variable that must be set. An empty value is still a value.
pub fn required(var: &str) -> Result<String, EnvError> {
  optional(var)?.ok_or_else(|| EnvError::Missing { var: var.to_string() })
}

/// Read a variable that may be absent.
pub fn optional(var: &str) -> Result<Option<String>, EnvError> {
  match env::var(var) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { var: var.to_string() }),
  }
}

/// Read a variable, treating an empty value the same as an absent one.
pub fn non_empty(var: &str) -> Result<Option<String>, EnvError> {
  Ok(optional(var)?.filter(|v| !v.is_empty()))
}

/// Whether the variable is present at all, whatever its value.
pub fn is_set(var: &str) -> bool {
  env::var_os(var).is_some()
}

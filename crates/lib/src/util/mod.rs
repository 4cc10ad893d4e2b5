//! Shared utilities.

pub mod walk;

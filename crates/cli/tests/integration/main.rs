//! Integration tests for muse-env commands run against a scratch workspace.

mod cleanup_tests;
mod common;
mod flags_tests;
mod options_tests;
mod sconscripts_tests;

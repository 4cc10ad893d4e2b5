//! muse-lib: build configuration derived from a Muse environment
//!
//! Muse sets up a workspace of local repos plus a Spack or UPS product stack
//! and describes it through environment variables. This crate turns those
//! variables into what an SCons build needs:
//! - `BuildOptions`: work dir, build directories, repos, mode and toggles
//! - include and library search paths
//! - compiler/linker flags, including relocatable RPATH entries
//! - the `SConscript` files of the local repos
//! - cleanup of stale files left in the build tree

pub mod cleanup;
pub mod consts;
pub mod descriptors;
pub mod env;
pub mod export;
pub mod flags;
pub mod libs;
pub mod options;
pub mod osenv;
pub mod paths;
pub mod rpath;
pub mod util;

pub use env::EnvError;
pub use options::{BuildMode, BuildOptions, Toggle};

mod cleanup;
mod export;
mod flags;
mod libs;
mod options;
mod os_env;
mod paths;
mod rpath;
mod sconscripts;

pub use cleanup::cmd_cleanup;
pub use export::cmd_export;
pub use flags::cmd_flags;
pub use libs::{LibSet, cmd_libs};
pub use options::cmd_options;
pub use os_env::cmd_os_env;
pub use paths::{cmd_cpp_path, cmd_lib_path};
pub use rpath::cmd_rpath;
pub use sconscripts::cmd_sconscripts;

use anyhow::{Context, Result};
use muse_lib::BuildOptions;

fn load_options() -> Result<BuildOptions> {
  BuildOptions::from_env().context("Failed to read the Muse environment")
}

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cmd::LibSet;
use crate::output::{OutputFormat, print_error};

/// muse-env - SCons build settings for a Muse workspace
#[derive(Parser)]
#[command(name = "muse-env")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging on stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the build options derived from the MUSE_* variables
  Options,

  /// Print the compiler include path
  CppPath,

  /// Print the linker library path
  LibPath,

  /// Print the RPATH entries for a Spack build
  Rpath,

  /// Print the compiler and linker flags
  Flags,

  /// List the SConscript files of the local repos
  Sconscripts,

  /// Remove stale files from the build directory
  Cleanup {
    /// Only list the files that would be removed
    #[arg(long)]
    dry_run: bool,
  },

  /// Show the shell variables passed through to the build
  OsEnv,

  /// Print a fixed external library list
  Libs {
    #[arg(value_enum)]
    set: LibSet,
  },

  /// Print everything above as a single JSON document
  Export,
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);
  debug!("muse-env v{} starting", env!("CARGO_PKG_VERSION"));

  if let Err(e) = run(cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let output = cli.output;
  match cli.command {
    Commands::Options => cmd::cmd_options(output),
    Commands::CppPath => cmd::cmd_cpp_path(output),
    Commands::LibPath => cmd::cmd_lib_path(output),
    Commands::Rpath => cmd::cmd_rpath(output),
    Commands::Flags => cmd::cmd_flags(output),
    Commands::Sconscripts => cmd::cmd_sconscripts(output),
    Commands::Cleanup { dry_run } => cmd::cmd_cleanup(dry_run, output),
    Commands::OsEnv => cmd::cmd_os_env(output),
    Commands::Libs { set } => cmd::cmd_libs(set, output),
    Commands::Export => cmd::cmd_export(),
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "error" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

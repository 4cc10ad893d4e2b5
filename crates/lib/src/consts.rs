//! Names shared across the crate: environment variables set by Muse and the
//! fixed file names the build tree relies on.

/// Build-descriptor file collected from every local repository.
pub const SCONSCRIPT: &str = "SConscript";

/// Sentinel file that marks a directory as a Muse build area. Survives cleanup.
pub const BUILD_MARKER: &str = ".musebuild";

/// Second path segment of the distributed filesystem used by grid jobs.
pub const CVMFS_MOUNT: &str = "cvmfs";

/// Environment variables read from the Muse setup.
pub mod vars {
  pub const MUSE_WORK_DIR: &str = "MUSE_WORK_DIR";
  pub const MUSE_STUB: &str = "MUSE_STUB";
  pub const MUSE_REPOS: &str = "MUSE_REPOS";
  pub const MUSE_BUILD: &str = "MUSE_BUILD";
  pub const MUSE_G4VIS: &str = "MUSE_G4VIS";
  pub const MUSE_G4ST: &str = "MUSE_G4ST";
  pub const MUSE_G4VG: &str = "MUSE_G4VG";
  pub const MUSE_TRIGGER: &str = "MUSE_TRIGGER";
  pub const MU2E_SPACK: &str = "MU2E_SPACK";

  pub const MUSE_BACKING: &str = "MUSE_BACKING";
  pub const MUSE_VIEW_INC: &str = "MUSE_VIEW_INC";
  pub const MUSE_LOCAL_REPOS: &str = "MUSE_LOCAL_REPOS";
  pub const MUSE_LIBRARY_PATH: &str = "MUSE_LIBRARY_PATH";
  pub const LD_LIBRARY_PATH: &str = "LD_LIBRARY_PATH";

  pub const MUSE_COMPILER_E: &str = "MUSE_COMPILER_E";
  pub const MUSE_CPPFLAGS: &str = "MUSE_CPPFLAGS";
}

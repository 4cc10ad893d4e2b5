//! Tests for `muse-env flags` and `muse-env rpath`.

use predicates::prelude::*;

use crate::common::{STUB, TestEnv};

#[test]
fn prof_flags_end_with_release_define() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("flags")
    .assert()
    .success()
    .stdout(predicate::str::starts_with("-std=c++17\n-Wall\n"))
    .stdout(predicate::str::ends_with("-O3\n-fno-omit-frame-pointer\n-DNDEBUG\n"));
}

#[test]
fn debug_flags_have_no_release_define() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("flags")
    .env("MUSE_BUILD", "debug")
    .env("MUSE_COMPILER_E", "e28")
    .assert()
    .success()
    .stdout(predicate::str::starts_with("-std=c++20\n"))
    .stdout(predicate::str::contains("-O0\n"))
    .stdout(predicate::str::contains("-DNDEBUG").not());
}

#[test]
fn bad_compiler_qualifier_fails() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("flags")
    .env("MUSE_COMPILER_E", "gcc13")
    .assert()
    .failure()
    .stderr(predicate::str::contains("MUSE_COMPILER_E"));
}

#[test]
fn spack_build_gets_relocatable_rpath() {
  let env = TestEnv::new();
  let local_lib = format!("{}/build/{}/Offline/lib", env.work_dir_str(), STUB);

  env
    .muse_cmd()
    .arg("rpath")
    .env("MU2E_SPACK", "1")
    .env("MUSE_LOCAL_REPOS", "Offline")
    .env("MUSE_LIBRARY_PATH", format!("{}:/opt/lib:/cvmfs/mu2e/lib", local_lib))
    .assert()
    .success()
    .stdout(
      "Warning RPATH not on cvmfs, may not work for grid jobs\n    /opt/lib\n\
       \\$ORIGIN/../../Offline/lib\n/opt/lib\n/cvmfs/mu2e/lib\n",
    );
}

#[test]
fn rpath_flags_follow_mode_flags() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("flags")
    .env("MU2E_SPACK", "")
    .env("MUSE_LIBRARY_PATH", "/cvmfs/mu2e/lib")
    .assert()
    .success()
    .stdout(predicate::str::ends_with("-DNDEBUG\n-Wl,-rpath,/cvmfs/mu2e/lib\n"));
}

#[test]
fn rpath_is_empty_without_spack() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("rpath")
    .env("MUSE_LIBRARY_PATH", "/opt/lib")
    .assert()
    .success()
    .stdout("");
}

#[test]
fn rpath_json_carries_warnings() {
  let env = TestEnv::new();

  let output = env
    .muse_cmd()
    .args(["rpath", "--output", "json"])
    .env("MU2E_SPACK", "1")
    .env("MUSE_LIBRARY_PATH", "/opt/lib")
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["entries"][0], "/opt/lib");
  assert_eq!(json["warnings"][0]["path"], "/opt/lib");
}

//! Tests for `muse-env cleanup`.

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn cleanup_removes_stale_objects_and_keeps_marker() {
  let env = TestEnv::new();
  let root = env.build_root();
  env.write_file(&format!("build/{}/.musebuild", crate::common::STUB), "");
  let stale = env.write_file(&format!("build/{}/Offline/Old/src/Gone.os", crate::common::STUB), "");

  env
    .muse_cmd()
    .arg("cleanup")
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("removing file  {}", stale.display())))
    .stdout(predicate::str::contains("Removed 1 file(s)"));

  assert!(root.join(".musebuild").exists());
  assert!(!stale.exists());
}

#[test]
fn cleanup_dry_run_keeps_files() {
  let env = TestEnv::new();
  let stale = env.write_file(&format!("build/{}/lib/libold.so", crate::common::STUB), "");

  env
    .muse_cmd()
    .args(["cleanup", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("would remove file {}", stale.display())))
    .stdout(predicate::str::contains("1 file(s) would be removed"));

  assert!(stale.exists());
}

#[test]
fn cleanup_leaves_a_regular_file_at_the_build_root() {
  let env = TestEnv::new();
  let root = env.write_file(&format!("build/{}", crate::common::STUB), "not a directory");

  env
    .muse_cmd()
    .arg("cleanup")
    .assert()
    .success()
    .stdout(predicate::str::contains("removing file").not())
    .stdout(predicate::str::contains("Removed 0 file(s)"));

  assert!(root.is_file());
}

#[test]
fn cleanup_without_build_tree_succeeds() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("cleanup")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed 0 file(s)"));
}

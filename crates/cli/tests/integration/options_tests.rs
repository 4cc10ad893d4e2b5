//! Tests for `muse-env options`.

use predicates::prelude::*;

use crate::common::{STUB, TestEnv};

#[test]
fn options_text_lists_key_value_pairs() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("options")
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("buildBase=build/{}\n", STUB)))
    .stdout(predicate::str::contains("g4vis=none\n"))
    .stdout(predicate::str::contains("spack=false\n"));
}

#[test]
fn options_json_uses_muse_key_names() {
  let env = TestEnv::new();

  let output = env
    .muse_cmd()
    .args(["options", "--output", "json"])
    .env("MU2E_SPACK", "1")
    .env("MUSE_TRIGGER", "on")
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["workDir"], env.work_dir_str());
  assert_eq!(json["libdir"], format!("build/{}/lib", STUB));
  assert_eq!(json["trigger"], "on");
  assert_eq!(json["spack"], true);
}

#[test]
fn missing_required_variable_is_fatal() {
  let env = TestEnv::new();

  env
    .muse_cmd()
    .arg("options")
    .env_remove("MUSE_G4VG")
    .assert()
    .failure()
    .stderr(predicate::str::contains("MUSE_G4VG"));
}

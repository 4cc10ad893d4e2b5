//! Tests for `muse-env sconscripts` and `muse-env export`.

use crate::common::TestEnv;

#[test]
fn lists_sconscripts_relative_to_work_dir() {
  let env = TestEnv::new();
  env.write_file("Offline/SConscript", "");
  env.write_file("Offline/TrkReco/SConscript", "");
  env.write_file("Offline/TrkReco/src/Fit.cc", "");
  env.write_file("Unlisted/SConscript", "");

  env
    .muse_cmd()
    .arg("sconscripts")
    .assert()
    .success()
    .stdout("Offline/SConscript\nOffline/TrkReco/SConscript\n");
}

#[cfg(unix)]
#[test]
fn symlinked_repo_is_not_built() {
  let env = TestEnv::new();
  let backing = tempfile::TempDir::new().unwrap();
  std::fs::create_dir_all(backing.path().join("Production")).unwrap();
  std::fs::write(backing.path().join("Production/SConscript"), "").unwrap();
  std::os::unix::fs::symlink(backing.path().join("Production"), env.work_dir().join("Production")).unwrap();
  env.write_file("Offline/SConscript", "");

  env
    .muse_cmd()
    .arg("sconscripts")
    .env("MUSE_REPOS", "Offline Production")
    .assert()
    .success()
    .stdout("Offline/SConscript\n");
}

#[test]
fn export_bundles_everything() {
  let env = TestEnv::new();
  env.write_file("Offline/SConscript", "");

  let output = env
    .muse_cmd()
    .arg("export")
    .env("MUSE_VIEW_INC", "/view/include")
    .output()
    .unwrap();
  assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["options"]["repos"], "Offline");
  assert_eq!(json["cpp_path"][1], "/view/include");
  assert_eq!(json["sconscripts"][0], "Offline/SConscript");
  assert_eq!(json["root_libs"][0], "GenVector");
  assert!(json["flags"].as_array().unwrap().contains(&serde_json::json!("-DNDEBUG")));
}

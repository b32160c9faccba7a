use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn resources() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources") }

#[test]
fn ctb_files_prints_selected_paths() {
  let root = resources().join("orig");
  let mut cmd = cargo_bin_cmd!("ctb-files");
  cmd.arg(&root).arg("1-5");
  let mut expected = vec![
    format!("{}", root.join("chtb_0003.mrg").display()),
    format!("{}", root.join("sub/chtb_0004.fid").display()),
  ];
  expected.sort();

  let output = cmd.output().unwrap();
  assert!(output.status.success());
  let mut printed = String::from_utf8(output.stdout)
    .unwrap()
    .lines()
    .map(str::to_string)
    .collect::<Vec<_>>();
  printed.sort();
  assert_eq!(printed, expected);
}

#[test]
fn ctb_files_repeats_for_overlapping_ranges() {
  let root = resources().join("orig");
  let mut cmd = cargo_bin_cmd!("ctb-files");
  cmd.arg(&root).arg("1-5").arg("3-10").arg("--sort");
  let three = root.join("chtb_0003.mrg");
  let four = root.join("sub/chtb_0004.fid");
  cmd.assert().success().stdout(format!(
    "{}\n{}\n{}\n{}\n",
    three.display(),
    three.display(),
    four.display(),
    four.display()
  ));

  let mut unique = cargo_bin_cmd!("ctb-files");
  unique.arg(&root).arg("1-5").arg("3-10").arg("--sort").arg("--unique");
  unique
    .assert()
    .success()
    .stdout(format!("{}\n{}\n", three.display(), four.display()));
}

#[test]
fn ctb_files_rejects_missing_directory() {
  let mut cmd = cargo_bin_cmd!("ctb-files");
  cmd.arg(resources().join("no-such-dir")).arg("1-5");
  cmd
    .assert()
    .failure()
    .stdout("")
    .stderr(predicate::str::contains("no directory?"));
}

#[test]
fn ctb_files_rejects_bad_and_absent_ranges() {
  let root = resources().join("orig");
  let mut bad = cargo_bin_cmd!("ctb-files");
  bad.arg(&root).arg("1-5").arg("7");
  bad
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid arg: 7"));

  let mut none = cargo_bin_cmd!("ctb-files");
  none.arg(&root);
  none
    .assert()
    .failure()
    .stderr(predicate::str::contains("no spans"));
}

#[test]
fn orig_files_searches_orig_directory() {
  let mut cmd = cargo_bin_cmd!("orig-files");
  cmd.current_dir(resources()).arg("90-100");
  cmd.assert().success().stdout("orig/chtb_0099.mrg\n");
}

#[test]
fn orig_files_without_orig_directory_prints_nothing() {
  let empty = tempfile::tempdir().unwrap();
  let mut cmd = cargo_bin_cmd!("orig-files");
  cmd.current_dir(empty.path()).arg("1-5");
  cmd.assert().success().stdout("");

  let mut none = cargo_bin_cmd!("orig-files");
  none.current_dir(empty.path());
  none
    .assert()
    .failure()
    .stderr(predicate::str::contains("no spans"));
}

#[test]
fn split_pos_strips_stdin() {
  let mut cmd = cargo_bin_cmd!("split-pos");
  cmd.write_stdin("The_DT dog_NN barks_VBZ\nword\n");
  cmd.assert().success().stdout("The dog barks\n\n");
}

#[test]
fn split_pos_can_keep_tags() {
  let mut cmd = cargo_bin_cmd!("split-pos");
  cmd.arg("--tags").write_stdin("The_DT dog_NN barks_VBZ\n");
  cmd.assert().success().stdout("DT NN VBZ\n");
}

#[test]
fn split_pos_accepts_gb_encoded_input() {
  let mut cmd = cargo_bin_cmd!("split-pos");
  cmd.write_stdin(&b"\xd6\xd0\xb9\xfa_NR dog_NN\nThe_DT dog_NN\n"[..]);
  cmd
    .assert()
    .success()
    .stdout(&b"\xd6\xd0\xb9\xfa dog\nThe dog\n"[..]);
}

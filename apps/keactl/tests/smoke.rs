use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_exits_successfully() {
  let mut cmd = Command::cargo_bin("keactl").expect("compile bin");
  let assert = cmd.arg("--help").assert();
  assert.success();
}

#[test]
fn no_args_prints_help_and_exits_zero() {
  let mut cmd = Command::cargo_bin("keactl").expect("compile bin");
  let assert = cmd.assert().success();
  let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
  assert!(stdout.contains("Usage"), "stdout: {stdout}");
}

#[test]
fn unknown_command_fails() {
  let mut cmd = Command::cargo_bin("keactl").expect("compile bin");
  cmd.arg("frobnicate").assert().failure();
}

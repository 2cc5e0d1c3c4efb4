#![cfg(feature = "cli")]

use std::{path::PathBuf, process::Command};

fn scratch_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("cvd_bmp_{}_{name}", std::process::id()))
}

fn command() -> Command {
  Command::new(env!("CARGO_BIN_EXE_cvd_bmp"))
}

#[test]
fn test_cli_processes_a_file() {
  let input = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/two_by_two.bmp");
  let output = scratch_path("ok.bmp");
  let result = command().arg("-i").arg(&input).arg("-o").arg(&output).output().unwrap();
  assert!(result.status.success(), "{result:?}");
  assert!(String::from_utf8_lossy(&result.stdout).contains("Successfully processed BMP file."));
  let bitmap = cvd_bmp::bmp::decode_bytes(&std::fs::read(&output).unwrap()).unwrap();
  assert_eq!((bitmap.width(), bitmap.height()), (2, 2));
  std::fs::remove_file(&output).ok();
}

#[test]
fn test_cli_failures_exit_nonzero() {
  let output = scratch_path("never.bmp");
  // missing output argument
  let result = command().args(["-i", "whatever.bmp"]).output().unwrap();
  assert!(!result.status.success());
  // input that doesn't exist
  let result = command().arg("-i").arg(scratch_path("missing.bmp")).arg("-o").arg(&output).output().unwrap();
  assert!(!result.status.success());
  // input that isn't an 8-bit BMP, no output file may appear
  let input = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/hostile_24bpp.bmp");
  let result = command().arg("-i").arg(&input).arg("-o").arg(&output).output().unwrap();
  assert!(!result.status.success());
  assert!(!output.exists());
}

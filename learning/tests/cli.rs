//! Runs the compiled binary and checks its exit status and stdout.

use assert_cmd::Command;
use hello_world::LINE_ENDING;

fn expected() -> String {
    format!("Hello world!{}", LINE_ENDING)
}

#[test]
fn hello_world_output() {
    let mut cmd = Command::cargo_bin("hello-world").unwrap();
    cmd.assert().success().stdout(expected());
}

#[test]
fn version_flag_is_ignored() {
    let mut cmd = Command::cargo_bin("hello-world").unwrap();
    cmd.arg("--version").assert().success().stdout(expected());
}

#[test]
fn arbitrary_arguments_are_ignored() {
    let mut cmd = Command::cargo_bin("hello-world").unwrap();
    cmd.args(["a", "-x", "--", "héllo"])
        .assert()
        .success()
        .stdout(expected());
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let mut cmd = Command::cargo_bin("hello-world").unwrap();
    cmd.arg(OsStr::from_bytes(b"\xff"))
        .assert()
        .success()
        .stdout(expected());
}

#[test]
fn debug_logging_stays_off_stdout() {
    let mut cmd = Command::cargo_bin("hello-world").unwrap();
    cmd.env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(expected());
}

use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn source_dir(work_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(work_dir.path().join("1.txt"), "one".to_string()));
    write_file(FileSpec::new(
        work_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        work_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    work_dir
}

#[fixture]
pub fn old_revision() -> String {
    "unchanged line\nunchanged line\nunchanged line".to_string()
}

#[fixture]
pub fn new_revision() -> String {
    "unchanged line\nchanged line\nunchanged line\nadded line".to_string()
}

#[fixture]
pub fn revisions_dir(work_dir: TempDir, old_revision: String, new_revision: String) -> TempDir {
    write_file(FileSpec::new(work_dir.path().join("old.txt"), old_revision));
    write_file(FileSpec::new(work_dir.path().join("new.txt"), new_revision));

    work_dir
}

pub fn run_scribe_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("scribe").expect("Failed to find scribe binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

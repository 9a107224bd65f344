mod common;

use assert_fs::TempDir;
use common::command::{revisions_dir, run_scribe_command, work_dir};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_plain_diff_between_revisions(revisions_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = "--- old.txt\n+++ new.txt\n    unchanged line\n +  changed line\n    unchanged line\n -  unchanged line\n +  added line\n";

    let output = run_scribe_command(revisions_dir.path(), &["diff", "--plain", "old.txt", "new.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn show_colored_diff_between_revisions(revisions_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let expected_output = concat!(
        "--- old.txt\n",
        "+++ new.txt\n",
        "\n",
        "\x1B[0m    unchanged line\x1B[0m\n",
        "\x1B[32m +  changed line\x1B[0m\n",
        "\x1B[0m    unchanged line\x1B[0m\n",
        "\x1B[31m -  unchanged line\x1B[0m\n",
        "\x1B[32m +  added line\x1B[0m\n",
    );

    let output = run_scribe_command(revisions_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn diff_of_identical_revisions_has_no_markers(revisions_dir: TempDir) {
    run_scribe_command(
        revisions_dir.path(),
        &["diff", "--plain", "--path", "notes.txt", "old.txt", "old.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(" -  ").not())
    .stdout(predicate::str::contains(" +  ").not());
}

#[rstest]
fn diff_fails_for_missing_revision(work_dir: TempDir) {
    run_scribe_command(work_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

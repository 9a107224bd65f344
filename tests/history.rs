mod common;

use assert_fs::TempDir;
use common::command::{run_scribe_command, work_dir};
use common::file::{FileSpec, write_file};
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn list_revisions_in_recorded_order(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    for (name, content) in [("rev1.txt", "a"), ("rev2.txt", "a\nb"), ("rev3.txt", "b")] {
        write_file(FileSpec::new(work_dir.path().join(name), content.to_string()));
    }

    let output = run_scribe_command(
        work_dir.path(),
        &["history", "--path", "notes.txt", "rev1.txt", "rev2.txt", "rev3.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("notes.txt (3 revisions)\n"));

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let entries = stdout.lines().skip(1).collect::<Vec<_>>();

    pretty_assertions::assert_eq!(entries.len(), 3);
    for (index, (entry, origin)) in entries
        .iter()
        .zip(["rev1.txt", "rev2.txt", "rev3.txt"])
        .enumerate()
    {
        let pattern = format!(r"^\s+{}\s+{}\s+\d{{4}}-\d{{2}}-\d{{2}}T", index, regex_escape(origin));
        assert!(
            predicates::str::is_match(pattern)?.eval(entry),
            "unexpected history entry: {entry}"
        );
    }

    Ok(())
}

#[rstest]
fn history_defaults_to_first_revision_path(work_dir: TempDir) {
    write_file(FileSpec::new(work_dir.path().join("draft.md"), "# draft".to_string()));

    run_scribe_command(work_dir.path(), &["history", "draft.md", "draft.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("draft.md (2 revisions)\n"));
}

fn regex_escape(text: &str) -> String {
    text.replace('.', r"\.")
}

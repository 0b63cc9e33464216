use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_unknown_commit_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["reset", "deadbeef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit with that id exists."));
}

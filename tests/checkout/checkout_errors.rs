use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_of_a_file_head_does_not_track_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "--", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn checkout_of_an_unknown_commit_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "deadbeef", "--", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn checkout_of_an_unknown_branch_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No such branch exists."));
}

#[rstest]
fn checkout_of_the_current_branch_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No need to checkout the current branch.",
        ));
}

use crate::common::command::{head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn find_prints_matching_commit_ids(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let head_id = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["find", "c1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&head_id));
}

#[rstest]
fn find_without_a_match_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["find", "no such message"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no commit with that message."));
}

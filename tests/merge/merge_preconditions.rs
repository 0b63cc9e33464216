use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_with_uncommitted_changes_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "dirty".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have uncommitted changes."));
}

#[rstest]
fn merge_with_an_unknown_branch_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["merge", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}

#[rstest]
fn merge_with_the_current_branch_reports_error(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["merge", "master"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot merge a branch with itself."));
}

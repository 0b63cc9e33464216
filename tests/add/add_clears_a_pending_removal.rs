use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_clears_a_pending_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_gitlet_command(dir.path(), &["rm", "f.txt"])
        .assert()
        .success();
    assert!(!dir.path().join("f.txt").exists());

    // bring the file back with its committed content and re-add it
    write_file(FileSpec::new(dir.path().join("f.txt"), "one".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"));

    // the removal mark is gone, so there is nothing left to commit
    gitlet_commit(dir.path(), "nothing")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes added to the commit."));
}

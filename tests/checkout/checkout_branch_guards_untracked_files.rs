use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_guards_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // feature tracks u.txt
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("u.txt"), "theirs".to_string()));
    run_gitlet_command(dir.path(), &["add", "u.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "track u").assert().success();

    // back on master, an untracked u.txt with different content is in the way
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("u.txt"), "mine".to_string()));

    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));

    // aborted with zero side effects
    assert_eq!(read_file(&dir.path().join("u.txt")), "mine");
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master\n"));
}

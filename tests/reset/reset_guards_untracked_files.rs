use crate::common::command::{
    gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_guards_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // commit a version that tracks u.txt, then one that drops it
    write_file(FileSpec::new(dir.path().join("u.txt"), "theirs".to_string()));
    run_gitlet_command(dir.path(), &["add", "u.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "track u").assert().success();
    let tracking_commit = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["rm", "u.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "drop u").assert().success();

    // an untracked u.txt now stands in the way of the old snapshot
    write_file(FileSpec::new(dir.path().join("u.txt"), "mine".to_string()));

    run_gitlet_command(dir.path(), &["reset", &tracking_commit])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));

    assert_eq!(read_file(&dir.path().join("u.txt")), "mine");
}

use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_guards_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // feature adds u.txt; master diverges so the merge is a real three-way
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
    gitlet_commit(dir.path(), "add u").assert().success();

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "two".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "advance master").assert().success();

    // an untracked u.txt with different content blocks the merge
    write_file(FileSpec::new(dir.path().join("u.txt"), "mine".to_string()));

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is an untracked file in the way; delete it or add it first.",
        ));

    // aborted before any mutation
    assert_eq!(read_file(&dir.path().join("u.txt")), "mine");
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}

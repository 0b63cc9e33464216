use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Both sides edit the same file: the merge writes conflict markers,
/// stages the conflicted file and refuses to auto-commit.
#[rstest]
fn merge_conflict_materializes_markers(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // common ancestor has f.txt = "base"
    write_file(FileSpec::new(dir.path().join("f.txt"), "base".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "base").assert().success();

    // branch B edits f.txt to "bar"
    run_gitlet_command(dir.path(), &["branch", "b"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "b"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "bar".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "bar").assert().success();

    // branch A (master) edits f.txt to "foo"
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "foo".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "foo").assert().success();

    run_gitlet_command(dir.path(), &["merge", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encountered a merge conflict."));

    // both versions survive between the markers
    assert_eq!(
        read_file(&dir.path().join("f.txt")),
        "<<<<<<< HEAD\nfoo\n=======\nbar\n>>>>>>>\n"
    );

    // the conflicted file is staged, awaiting an explicit commit
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nf.txt\n"));

    // no merge commit was created
    run_gitlet_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged").not());
}

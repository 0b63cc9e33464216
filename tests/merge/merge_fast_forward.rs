use crate::common::command::{
    gitlet_commit, global_commit_count, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // advance only the feature branch
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "two".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "c2").assert().success();
    let feature_head = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    let commits_before = global_commit_count(dir.path());

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current branch fast-forwarded."));

    // master now points at feature's commit; no new commit object exists
    assert_eq!(head_commit_id(dir.path()), feature_head);
    assert_eq!(global_commit_count(dir.path()), commits_before);

    // and the working tree was synced to the target snapshot
    assert_eq!(read_file(&dir.path().join("f.txt")), "two");
}

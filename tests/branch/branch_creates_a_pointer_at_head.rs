use crate::common::command::{head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn branch_creates_a_pointer_at_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let head_before = head_commit_id(dir.path());

    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    // the new branch points at the same commit and carries the same tree
    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    assert_eq!(head_commit_id(dir.path()), head_before);
    assert_eq!(read_file(&dir.path().join("f.txt")), "one");
}

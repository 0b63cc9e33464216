use crate::common::command::{
    gitlet_commit, head_commit_id, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_file_from_commit_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let first_commit = head_commit_id(dir.path());

    write_file(FileSpec::new(dir.path().join("f.txt"), "two".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "c2").assert().success();

    // an unambiguous prefix resolves just like the full id
    let prefix = &first_commit[..8];
    run_gitlet_command(dir.path(), &["checkout", prefix, "--", "f.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("f.txt")), "one");
}

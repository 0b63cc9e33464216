use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_file_restores_the_head_version(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // clobber the working copy without staging anything
    write_file(FileSpec::new(
        dir.path().join("f.txt"),
        "scribbles".to_string(),
    ));

    run_gitlet_command(dir.path(), &["checkout", "--", "f.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("f.txt")), "one");
}

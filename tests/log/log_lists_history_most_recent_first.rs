use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_lists_history_most_recent_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("f.txt"), "v2".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "c2").assert().success();

    let output = run_gitlet_command(dir.path(), &["log"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let messages = stdout
        .lines()
        .filter(|line| ["c1", "c2", "initial commit"].contains(line))
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["c2", "c1", "initial commit"]);

    // every entry carries a divider and a commit id line
    assert_eq!(stdout.matches("===").count(), 3);
    assert_eq!(stdout.matches("Commit ").count(), 3);
}

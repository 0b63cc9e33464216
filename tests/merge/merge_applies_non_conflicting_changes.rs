use crate::common::command::{gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Divergent but compatible histories auto-merge into a new commit:
/// master edits `f.txt`, feature edits `g.txt` and deletes `h.txt`.
#[rstest]
fn merge_applies_non_conflicting_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // broaden the common base with g.txt and h.txt
    write_file(FileSpec::new(dir.path().join("g.txt"), "g-base".to_string()));
    write_file(FileSpec::new(dir.path().join("h.txt"), "h-base".to_string()));
    run_gitlet_command(dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["add", "h.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "base").assert().success();

    // feature: edit g.txt, drop h.txt
    run_gitlet_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("g.txt"), "g-feature".to_string()));
    run_gitlet_command(dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    run_gitlet_command(dir.path(), &["rm", "h.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "feature work").assert().success();

    // master: edit f.txt only
    run_gitlet_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "f-master".to_string()));
    run_gitlet_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    gitlet_commit(dir.path(), "master work").assert().success();

    run_gitlet_command(dir.path(), &["merge", "feature"])
        .assert()
        .success();

    // both sides' changes are present
    assert_eq!(read_file(&dir.path().join("f.txt")), "f-master");
    assert_eq!(read_file(&dir.path().join("g.txt")), "g-feature");
    assert!(!dir.path().join("h.txt").exists());

    // the merge auto-committed and left a clean staging index
    run_gitlet_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged feature into master."));
    run_gitlet_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"));
}

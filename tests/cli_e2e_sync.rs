//! End-to-end tests for the `push`, `pull` and `sync` commands.

mod common;
use common::prelude::*;

/// Both repositories cloned from upstream, sub parked on a side branch so
/// main can push into its `main` branch, and one new commit in main.
fn prepared_workspace() -> Workspace {
    let ws = Workspace::new();
    ws.setup(Some(ws.upstream()));
    ws.git(&ws.sub_dir(), &["checkout", "-b", "parked"])
        .assert()
        .success();
    ws.commit_file(&ws.main_dir(), "feature.txt", "feature\n", "Add feature");
    ws
}

#[test]
fn test_sync_pushes_and_updates_sub() {
    if should_skip_git_tests() {
        return;
    }
    let ws = prepared_workspace();
    let main_head = ws.git_stdout(&ws.main_dir(), &["rev-parse", "HEAD"]);

    ws.cmd()
        .arg("sync")
        .assert()
        .success()
        .stderr(predicate::str::contains("No --pull-branch given"))
        .stdout(predicate::str::contains("[OK] Synced main"));

    let sub = ws.sub_dir();
    assert_eq!(ws.git_stdout(&sub, &["rev-parse", "HEAD"]), main_head);
    assert_eq!(
        ws.git_stdout(&sub, &["rev-parse", "--abbrev-ref", "HEAD"]),
        "main"
    );
    assert!(sub.join("feature.txt").exists());
}

/// The pull-branch fallback is a warning, so it survives a quieter log level.
#[test]
fn test_sync_pull_branch_fallback_is_a_warning() {
    if should_skip_git_tests() {
        return;
    }
    let ws = prepared_workspace();

    ws.cmd()
        .args(["--log-level", "warn", "sync"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "No --pull-branch given; pulling 'main' from 'origin'",
        ))
        .stderr(predicate::str::contains("Pushing changes").not());
}

/// An explicit pull branch is used as given and silences the fallback warning.
#[test]
fn test_sync_uses_explicit_pull_branch() {
    if should_skip_git_tests() {
        return;
    }
    let ws = prepared_workspace();

    ws.cmd()
        .args(["sync", "--pull-branch", "no-such-branch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git pull origin no-such-branch"))
        .stderr(predicate::str::contains("No --pull-branch given").not());
}

/// Push succeeds, pull conflicts: the push stays applied, the sub repository
/// is left unmerged, and the failure is reported once.
#[test]
fn test_sync_pull_conflict_keeps_push() {
    if should_skip_git_tests() {
        return;
    }
    let ws = prepared_workspace();
    ws.commit_file(&ws.main_dir(), "README.md", "# from main\n", "Edit README in main");
    let main_head = ws.git_stdout(&ws.main_dir(), &["rev-parse", "HEAD"]);

    // upstream moves on with a conflicting edit of the same file
    let side = ws.root().join("side");
    ws.git(ws.root(), &["clone"])
        .arg(ws.upstream())
        .arg(&side)
        .assert()
        .success();
    ws.commit_file(&side, "README.md", "# from upstream\n", "Edit README upstream");
    ws.git(&side, &["push", "origin", "main"]).assert().success();
    let upstream_head = ws.git_stdout(&side, &["rev-parse", "HEAD"]);

    let assert = ws
        .cmd()
        .arg("sync")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stage 'pull'"))
        .stdout(predicate::str::contains("Synced").not());

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("Caused by:").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("`git pull origin main`").count(), 1, "{stderr}");

    let sub = ws.sub_dir();
    assert_eq!(ws.git_stdout(&sub, &["rev-parse", "refs/heads/main"]), main_head);
    assert_eq!(ws.git_stdout(&sub, &["rev-parse", "HEAD"]), main_head);
    assert_ne!(ws.git_stdout(&sub, &["rev-parse", "HEAD"]), upstream_head);
    assert!(!ws.git_succeeds(&sub, &["merge-base", "--is-ancestor", &upstream_head, "HEAD"]));
}

/// A rejected push stops the sync before the sub repository is touched.
#[test]
fn test_sync_push_rejection_skips_checkout_and_pull() {
    if should_skip_git_tests() {
        return;
    }
    let ws = Workspace::new();
    ws.setup(Some(ws.upstream()));
    // sub still has `main` checked out, so git refuses the push
    ws.commit_file(&ws.main_dir(), "feature.txt", "feature\n", "Add feature");

    ws.cmd()
        .arg("sync")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stage 'push'"))
        .stderr(predicate::str::contains("Checking out").not())
        .stderr(predicate::str::contains("Pulling").not());

    assert!(!ws.sub_dir().join("feature.txt").exists());
}

#[test]
fn test_push_sends_branch_to_linked_remote() {
    if should_skip_git_tests() {
        return;
    }
    let ws = prepared_workspace();
    let main_head = ws.git_stdout(&ws.main_dir(), &["rev-parse", "HEAD"]);

    ws.cmd()
        .arg("push")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed main to subrepo"));

    assert_eq!(
        ws.git_stdout(&ws.sub_dir(), &["rev-parse", "refs/heads/main"]),
        main_head
    );
}

#[test]
fn test_pull_into_main_from_origin() {
    if should_skip_git_tests() {
        return;
    }
    let ws = Workspace::new();
    ws.setup(Some(ws.upstream()));

    ws.cmd()
        .arg("pull")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulled main from origin"));
}

#[test]
fn test_pull_unknown_remote_fails() {
    if should_skip_git_tests() {
        return;
    }
    let ws = Workspace::new();
    ws.setup(None);

    ws.cmd()
        .arg("pull")
        .arg("--remote")
        .arg("nowhere")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git pull nowhere main"));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failures real git reports, classified end to end.

use crate::prelude::*;

async fn fails(repo: &Repo, args: &[&str], operation: &str) -> ExecError {
    execute(args, repo.path(), operation, ExecOptions::new()).await.unwrap_err()
}

#[tokio::test]
async fn existing_branch() {
    require_git!();
    let repo = Repo::with_commit();
    repo.git(&["branch", "topic"]);

    let err = fails(&repo, &["branch", "topic"], "createBranch").await;
    assert!(err.is_git_error(GitErrorCode::BranchAlreadyExists));
    assert_eq!(err.operation(), "createBranch");
    assert_eq!(err.to_string(), "A branch with that name already exists.");
    assert_eq!(err.result().unwrap().exit_code, 128);
}

#[tokio::test]
async fn bad_revision() {
    require_git!();
    let repo = Repo::with_commit();
    let err = fails(&repo, &["log", "nosuchref", "--"], "log").await;
    assert_eq!(err.git_error(), Some(GitErrorCode::BadRevision));
}

#[tokio::test]
async fn missing_path_in_revision() {
    require_git!();
    let repo = Repo::with_commit();
    let err = fails(&repo, &["show", "HEAD:nofile"], "show").await;
    assert_eq!(err.git_error(), Some(GitErrorCode::PathDoesNotExist));
}

#[tokio::test]
async fn nothing_to_commit_is_read_from_stdout() {
    require_git!();
    let repo = Repo::with_commit();
    let err = fails(&repo, &["commit", "-m", "again"], "commit").await;

    assert_eq!(err.git_error(), Some(GitErrorCode::NothingToCommit));
    let result = err.result().unwrap();
    assert!(result.stdout_text().contains("nothing to commit"));
}

#[tokio::test]
async fn no_merge_to_abort() {
    require_git!();
    let repo = Repo::with_commit();
    let err = fails(&repo, &["merge", "--abort"], "abortMerge").await;
    assert_eq!(err.git_error(), Some(GitErrorCode::NoMergeToAbort));
}

#[tokio::test]
async fn rebase_conflict() {
    require_git!();
    let repo = Repo::with_commit();
    repo.git(&["checkout", "-q", "-b", "topic"]);
    repo.file("README", "topic\n");
    repo.git(&["commit", "-q", "-a", "-m", "topic"]);
    repo.git(&["checkout", "-q", "main"]);
    repo.file("README", "main\n");
    repo.git(&["commit", "-q", "-a", "-m", "main"]);
    repo.git(&["checkout", "-q", "topic"]);

    let err = fails(&repo, &["rebase", "main"], "rebase").await;
    assert_eq!(err.git_error(), Some(GitErrorCode::RebaseConflicts));
    assert!(err.result().unwrap().stdout_text().contains("CONFLICT"));
}

#[tokio::test]
async fn outside_a_repository() {
    require_git!();
    let dir = tempfile::tempdir().unwrap();
    let ceiling = dir.path().parent().unwrap().to_str().unwrap();
    let options = ExecOptions::new().env("GIT_CEILING_DIRECTORIES", ceiling);
    let err = execute(&["status"], dir.path(), "status", options).await.unwrap_err();
    assert_eq!(err.git_error(), Some(GitErrorCode::NotAGitRepository));
}

#[tokio::test]
async fn unrecognized_failure_keeps_git_text() {
    require_git!();
    let repo = Repo::with_commit();
    let err = fails(&repo, &["config", "--get", "no.such.key"], "getConfig").await;

    // Exit 1 with no output at all.
    assert_eq!(err.git_error(), None);
    assert_eq!(err.to_string(), "unknown error (exit code 1)");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that succeed or fail in ways the caller accepted.

use crate::prelude::*;

#[tokio::test]
async fn status_in_fresh_repository_has_no_error() {
    require_git!();
    let repo = Repo::init();

    let result = execute(&["status"], repo.path(), "status", ExecOptions::new()).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.git_error, None);
    assert_eq!(result.git_error_description, None);
    assert_eq!(result.path, repo.path());
}

#[tokio::test]
async fn progress_free_output_is_captured() {
    require_git!();
    let repo = Repo::with_commit();

    let result =
        execute(&["log", "--format=%s"], repo.path(), "log", ExecOptions::new()).await.unwrap();
    assert_eq!(result.stdout_text(), "initial\n");
    assert_eq!(result.combined_output, "initial\n");
}

#[tokio::test]
async fn nothing_to_commit_can_be_expected() {
    require_git!();
    let repo = Repo::with_commit();

    let options = ExecOptions::new().expected_errors([GitErrorCode::NothingToCommit]);
    let result = execute(&["commit", "-m", "again"], repo.path(), "commit", options).await.unwrap();
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.git_error, Some(GitErrorCode::NothingToCommit));
}

#[tokio::test]
async fn custom_success_code_suppresses_classification() {
    require_git!();
    let repo = Repo::with_commit();

    let options = ExecOptions::new().success_exit_codes([0, 1]);
    let result = execute(&["commit", "-m", "again"], repo.path(), "commit", options).await.unwrap();
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.git_error, None);
}

#[tokio::test]
async fn stdin_feeds_git() {
    require_git!();
    let repo = Repo::init();

    let options = ExecOptions::new().stdin(b"blob contents".to_vec());
    let result =
        execute(&["hash-object", "--stdin"], repo.path(), "hashObject", options).await.unwrap();
    assert_eq!(result.stdout_text(), "504d90c9b6fdb31e0db5c98cd820e77740cfab7f\n");
}

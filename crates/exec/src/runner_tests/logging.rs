// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gp_errors::GitErrorCode;

const BRANCH_EXISTS: &str = "printf 'fatal: A branch named '\\''topic'\\'' already exists.\\n' >&2; exit 128";

#[tokio::test]
async fn failure_is_logged_once() {
    let (logs, _guard) = capture_logs();
    let _ = run_sh(&sh(), BRANCH_EXISTS, ExecOptions::new()).await.unwrap_err();

    let text = logs.text();
    assert_eq!(text.matches("git command failed").count(), 1);
    assert!(text.contains("ERROR"));
    assert!(text.contains("BranchAlreadyExists"));
}

#[tokio::test]
async fn expected_error_is_not_logged_as_error() {
    let (logs, _guard) = capture_logs();
    let options = ExecOptions::new().expected_errors([GitErrorCode::BranchAlreadyExists]);
    run_sh(&sh(), BRANCH_EXISTS, options).await.unwrap();

    let text = logs.text();
    assert!(!text.contains("ERROR"));
    assert!(text.contains("git failed with an expected error"));
}

#[tokio::test]
async fn logged_output_is_trimmed_to_message_tail() {
    let (logs, _guard) = capture_logs();
    let runner = GitRunner::new(GitConfig { message_tail: 8, ..sh_config() });
    let script = "printf '%s-%s-%s\\nlate\\n' early context line >&2; exit 1";
    let failure = failure(run_sh(&runner, script, ExecOptions::new()).await.unwrap_err());

    assert!(failure.terminal_output.contains("early-context-line"));
    let text = logs.text();
    assert!(!text.contains("early-context-line"));
    assert!(text.contains("output=ne"));
}

#[tokio::test]
async fn spawn_failure_is_logged() {
    let (logs, _guard) = capture_logs();
    let runner = GitRunner::new(GitConfig {
        git_executable: PathBuf::from("/nonexistent/bin/git"),
        ..GitConfig::default()
    });
    let _ = runner.execute(&["status"], &std::env::temp_dir(), "status", ExecOptions::new()).await;
    assert!(logs.text().contains("failed to run git"));
}

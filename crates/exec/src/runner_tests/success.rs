// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::RecordingRecorder;
use gp_errors::GitErrorCode;

#[tokio::test]
async fn zero_exit_is_success() {
    let result = run_sh(&sh(), "printf 'hello\\n'", ExecOptions::new()).await.unwrap();

    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout_text(), "hello\n");
    assert!(result.stderr.is_empty());
    assert_eq!(result.git_error, None);
    assert_eq!(result.git_error_description, None);
    assert_eq!(result.path, std::env::temp_dir());
}

#[tokio::test]
async fn custom_success_codes_suppress_classification() {
    let script = "printf 'nothing to commit, working tree clean\\n'; exit 1";
    let options = ExecOptions::new().success_exit_codes([0, 1]);
    let result = run_sh(&sh(), script, options).await.unwrap();

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.git_error, None);
    assert_eq!(result.git_error_description, None);
}

#[tokio::test]
async fn zero_outside_success_set_is_a_failure() {
    let options = ExecOptions::new().success_exit_codes([1]);
    let err = run_sh(&sh(), "exit 0", options).await.unwrap_err();
    assert_eq!(failure(err).message, "unknown error (exit code 0)");
}

#[tokio::test]
async fn expected_error_is_returned_as_data() {
    let script = "printf 'fatal: A branch named '\\''topic'\\'' already exists.\\n' >&2; exit 128";
    let options = ExecOptions::new().expected_errors([GitErrorCode::BranchAlreadyExists]);
    let result = run_sh(&sh(), script, options).await.unwrap();

    assert_eq!(result.exit_code, 128);
    assert_eq!(result.git_error, Some(GitErrorCode::BranchAlreadyExists));
    assert!(result.git_error_description.is_some());
}

#[tokio::test]
async fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cwd = dir.path().canonicalize().unwrap();
    let result = sh().execute(&["-c", "pwd"], &cwd, "pwd", ExecOptions::new()).await.unwrap();

    assert_eq!(result.stdout_text().trim_end(), cwd.to_str().unwrap());
    assert_eq!(result.path, cwd);
}

#[tokio::test]
async fn stdin_is_written_and_closed() {
    let options = ExecOptions::new().stdin(b"refs/heads/main\n".to_vec());
    let result = run_sh(&sh(), "cat", options).await.unwrap();
    assert_eq!(result.stdout_text(), "refs/heads/main\n");
}

#[tokio::test]
async fn unread_stdin_is_not_an_error() {
    let options = ExecOptions::new().stdin(vec![b'x'; 1024 * 1024]);
    let result = run_sh(&sh(), "exit 0", options).await.unwrap();
    assert_eq!(result.exit_code, 0);
}

#[tokio::test]
async fn timing_is_recorded_per_command() {
    let recorder = RecordingRecorder::new();
    let runner = sh().with_recorder(recorder.clone());
    run_sh(&runner, "exit 0", ExecOptions::new()).await.unwrap();
    let _ = run_sh(&runner, "exit 1", ExecOptions::new()).await;

    assert_eq!(recorder.labels(), vec!["git -c exit 0", "git -c exit 1"]);
}

#[tokio::test]
async fn free_function_uses_default_runner() {
    // Spawn failure without git installed, usage error with it.
    let args = ["--definitely-not-an-option"];
    let err = execute(&args, &std::env::temp_dir(), "probe", ExecOptions::new()).await.unwrap_err();
    assert_eq!(err.operation(), "probe");
}

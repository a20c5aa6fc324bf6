// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gp_errors::GitErrorCode;

const REJECTED_PUSH: &str = r#"printf '%s\n' "To origin" " ! [rejected]        main -> main (non-fast-forward)" "error: failed to push some refs to 'origin'" >&2; exit 1"#;

#[tokio::test]
async fn rejected_push_is_described() {
    let err = run_sh(&sh(), REJECTED_PUSH, ExecOptions::new()).await.unwrap_err();

    assert!(err.is_git_error(GitErrorCode::PushNotFastForward));
    let failure = failure(err);
    assert_eq!(failure.operation, "test");
    assert_eq!(failure.args, vec!["-c", REJECTED_PUSH]);
    assert!(!failure.is_raw_message);
    assert_eq!(
        failure.message,
        "The repository has been updated since you last pulled. Try pulling before pushing."
    );
    assert_eq!(failure.result.exit_code, 1);
    assert!(failure.terminal_output.contains("[rejected]"));
}

#[tokio::test]
async fn unrecognized_failure_uses_raw_stderr() {
    let script = "printf 'fatal: something odd\\n' >&2; exit 128";
    let failure = failure(run_sh(&sh(), script, ExecOptions::new()).await.unwrap_err());

    assert_eq!(failure.result.git_error, None);
    assert_eq!(failure.result.git_error_description, None);
    assert_eq!(failure.message, "fatal: something odd\n");
    assert!(failure.is_raw_message);
}

#[tokio::test]
async fn stdout_is_classified_when_stderr_is_silent() {
    let script = "printf 'nothing to commit, working tree clean\\n'; exit 1";
    let err = run_sh(&sh(), script, ExecOptions::new()).await.unwrap_err();
    assert_eq!(err.git_error(), Some(GitErrorCode::NothingToCommit));
    assert_eq!(failure(err).message, "There are no changes to commit.");
}

#[tokio::test]
async fn silent_failure_reports_exit_code() {
    let failure = failure(run_sh(&sh(), "exit 3", ExecOptions::new()).await.unwrap_err());
    assert_eq!(failure.message, "unknown error (exit code 3)");
}

#[tokio::test]
async fn unexpected_code_is_still_raised() {
    let options = ExecOptions::new().expected_errors([GitErrorCode::BranchAlreadyExists]);
    let err = run_sh(&sh(), REJECTED_PUSH, options).await.unwrap_err();
    assert!(err.is_git_error(GitErrorCode::PushNotFastForward));
}

#[tokio::test]
async fn config_lock_failure_keeps_stderr() {
    let script = "printf 'error: could not lock config file /r/.git/config: File exists\\n' >&2; exit 255";
    let err = run_sh(&sh(), script, ExecOptions::new()).await.unwrap_err();

    assert!(err.is_git_error(GitErrorCode::ConfigLockFileAlreadyExists));
    let result = err.result().unwrap();
    assert_eq!(
        gp_errors::parse_config_lock_file_path(&result.stderr_text()),
        Some(PathBuf::from("/r/.git/config.lock"))
    );
}

#[tokio::test]
async fn missing_executable_is_a_spawn_error() {
    let runner = GitRunner::new(GitConfig {
        git_executable: PathBuf::from("/nonexistent/bin/git"),
        ..GitConfig::default()
    });
    let err = runner
        .execute(&["status"], &std::env::temp_dir(), "status", ExecOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Spawn { .. }));
    assert_eq!(err.operation(), "status");
    assert!(err.to_string().starts_with("failed to execute status:"));
    assert_eq!(err.git_error(), None);
}

#[tokio::test]
async fn missing_working_directory_is_a_spawn_error() {
    let err = sh()
        .execute(&["-c", "exit 0"], Path::new("/nonexistent/repo"), "status", ExecOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::Spawn { .. }));
}

#[tokio::test]
async fn overflow_keeps_output_up_to_the_limit() {
    let options = ExecOptions::new().max_buffer(10usize);
    let err = run_sh(&sh(), "printf '0123456789abcdef'", options).await.unwrap_err();

    match err {
        ExecError::MaxBufferExceeded { limit, stream, stdout, .. } => {
            assert_eq!(limit, 10);
            assert_eq!(stream, StreamKind::Stdout);
            assert_eq!(stdout.as_text(), "0123456789");
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[tokio::test]
async fn overflow_keeps_later_output_on_the_other_stream() {
    let options = ExecOptions::new().max_buffer(16usize);
    let script = "printf 'far too much output for stdout'; sleep 0.2; \
        printf 'fatal: x\\n' >&2; exit 128";
    let err = run_sh(&sh(), script, options).await.unwrap_err();

    match err {
        ExecError::MaxBufferExceeded {
            stream,
            stdout,
            stderr,
            ..
        } => {
            assert_eq!(stream, StreamKind::Stdout);
            assert_eq!(stdout.as_text(), "far too much out");
            assert_eq!(stderr.as_text(), "fatal: x\n");
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[tokio::test]
async fn overflow_wins_over_success() {
    let options = ExecOptions::new().max_buffer(4usize);
    let err = run_sh(&sh(), "printf 'oops, too much' >&2; exit 0", options).await.unwrap_err();
    assert!(matches!(err, ExecError::MaxBufferExceeded { stream: StreamKind::Stderr, .. }));
}

#[tokio::test]
async fn failure_display_is_the_message() {
    let script = "printf 'fatal: bad thing\\n' >&2; exit 2";
    let err = run_sh(&sh(), script, ExecOptions::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "fatal: bad thing\n");
}

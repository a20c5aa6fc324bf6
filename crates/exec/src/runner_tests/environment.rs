// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{EnvironmentError, FakeEnvironment};

const PRINT_ENV: &str = r#"printf '%s|%s|%s' "$GP_PROVIDED" "$GP_CALLER" "$TERM""#;

#[tokio::test]
async fn provider_and_caller_vars_reach_git() {
    let environment = FakeEnvironment::new().with_var("GP_PROVIDED", "askpass");
    let runner = sh().with_environment(environment.clone());
    let options = ExecOptions::new().env("GP_CALLER", "caller").env("TERM", "xterm-256color");

    let result = run_sh(&runner, PRINT_ENV, options).await.unwrap();
    assert_eq!(result.stdout_text(), "askpass|caller|dumb");

    let calls = environment.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, std::env::temp_dir());
    assert_eq!(calls[0].caller_env["GP_CALLER"], "caller");
    assert!(!calls[0].is_background_task);
}

#[tokio::test]
async fn background_flag_reaches_provider() {
    let environment = FakeEnvironment::new();
    let runner = sh().with_environment(environment.clone());
    run_sh(&runner, "exit 0", ExecOptions::new().is_background_task(true)).await.unwrap();
    assert!(environment.calls()[0].is_background_task);
}

#[tokio::test]
async fn provider_failure_prevents_spawn() {
    let environment = FakeEnvironment::new().failing("credential prompt dismissed");
    let runner = sh().with_environment(environment);
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let script = format!("touch {}", marker.display());

    let err = run_sh(&runner, &script, ExecOptions::new()).await.unwrap_err();
    match &err {
        ExecError::Environment { operation, source: EnvironmentError::Failed(message) } => {
            assert_eq!(operation, "test");
            assert_eq!(message, "credential prompt dismissed");
        }
        other => panic!("expected environment error, got {other:?}"),
    }
    assert!(!marker.exists());
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gp -- <git args>` end to end.

use crate::prelude::*;

#[test]
fn success_passes_output_through() {
    require_git!();
    let repo = Repo::with_commit();
    let Some(output) = repo.gp(&["--", "log", "--format=%s"]) else { return };

    assert!(output.status.success());
    assert_eq!(stdout(&output), "initial\n");
}

#[test]
fn failure_exits_with_git_code_and_names_error() {
    require_git!();
    let repo = Repo::with_commit();
    repo.git(&["branch", "topic"]);
    let Some(output) = repo.gp(&["--name", "createBranch", "--", "branch", "topic"]) else {
        return;
    };

    assert_eq!(output.status.code(), Some(128));
    let stderr = stderr(&output);
    assert!(stderr.contains("BranchAlreadyExists"), "stderr: {stderr}");
    assert!(stderr.contains("A branch with that name already exists."));
}

#[test]
fn expected_error_keeps_exit_code_without_failing() {
    require_git!();
    let repo = Repo::with_commit();
    let args = ["--expect", "NothingToCommit", "--", "commit", "-m", "again"];
    let Some(output) = repo.gp(&args) else {
        return;
    };
    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr(&output).contains("error:"));
}

#[test]
fn json_report() {
    require_git!();
    let repo = Repo::with_commit();
    let Some(output) = repo.gp(&["-o", "json", "--", "log", "nosuchref", "--"]) else { return };

    assert_eq!(output.status.code(), Some(128));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ok"], false);
    assert_eq!(report["result"]["git_error"], "BadRevision");
    assert_eq!(report["error"]["kind"], "git");
}

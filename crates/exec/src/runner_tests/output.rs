// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{Encoding, LiveProcess, Output};
use parking_lot::Mutex;
use std::sync::Arc;

#[tokio::test]
async fn binary_output_is_raw_bytes() {
    let options = ExecOptions::new().encoding(Encoding::Binary);
    let result = run_sh(&sh(), r"printf '\377\000\001'", options).await.unwrap();
    assert_eq!(result.stdout, Output::Binary(vec![0xff, 0x00, 0x01]));
}

#[tokio::test]
async fn progress_redraws_collapse_in_combined_output() {
    let script = r"printf 'Counting: 10%%\rCounting: 55%%\rCounting: 100%%\n' >&2; printf 'done\n' >&2";
    let result = run_sh(&sh(), script, ExecOptions::new()).await.unwrap();

    assert_eq!(result.combined_output, "Counting: 100%\ndone\n");
    assert_eq!(result.stderr_text(), "Counting: 10%\rCounting: 55%\rCounting: 100%\ndone\n");
}

#[tokio::test]
async fn large_output_on_both_pipes_is_drained() {
    let script = r#"i=0; while [ $i -lt 5000 ]; do echo "out $i"; echo "err $i" >&2; i=$((i+1)); done; exit 1"#;
    let runner = GitRunner::new(GitConfig { terminal_tail: 64, ..sh_config() });
    let failure = failure(run_sh(&runner, script, ExecOptions::new()).await.unwrap_err());

    assert!(failure.result.stdout_text().starts_with("out 0\n"));
    assert!(failure.result.stdout_text().ends_with("out 4999\n"));
    assert!(failure.result.stderr_text().ends_with("err 4999\n"));
    assert!(failure.terminal_output.len() <= 64);
    assert!(failure.terminal_output.contains("4999"));
}

#[tokio::test]
async fn observer_sees_every_chunk() {
    let seen: Arc<Mutex<Vec<LiveProcess>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let options = ExecOptions::new().observer(move |process| sink.lock().push(process));

    let result = run_sh(&sh(), "printf 'a\\n'; printf 'b\\n' >&2", options).await.unwrap();
    assert_eq!(result.stdout_text(), "a\n");

    let mut processes = std::mem::take(&mut *seen.lock());
    assert_eq!(processes.len(), 1);
    let process = &mut processes[0];
    assert!(process.pid.is_some());

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    while let Ok(chunk) = process.output.try_recv() {
        match chunk.stream {
            StreamKind::Stdout => stdout.extend(chunk.bytes),
            StreamKind::Stderr => stderr.extend(chunk.bytes),
        }
    }
    assert_eq!(stdout, b"a\n");
    assert_eq!(stderr, b"b\n");
}

#[tokio::test]
async fn dropped_observer_does_not_stall_capture() {
    let options = ExecOptions::new().observer(drop);
    let result = run_sh(&sh(), "printf 'still captured\\n'", options).await.unwrap();
    assert_eq!(result.stdout_text(), "still captured\n");
}

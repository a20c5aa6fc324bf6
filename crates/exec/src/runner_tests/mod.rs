// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner tests drive `/bin/sh -c <script>` in place of git, so exit codes
//! and output are fully scripted.

#![cfg(unix)]

mod environment;
mod failure;
mod logging;
mod output;
mod success;

use super::*;
use crate::GitConfig;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

fn sh_config() -> GitConfig {
    GitConfig { git_executable: PathBuf::from("/bin/sh"), ..GitConfig::default() }
}

fn sh() -> GitRunner {
    GitRunner::new(sh_config())
}

async fn run_sh(
    runner: &GitRunner,
    script: &str,
    options: ExecOptions,
) -> Result<ExecResult, ExecError> {
    runner.execute(&["-c", script], &std::env::temp_dir(), "test", options).await
}

fn failure(err: ExecError) -> GitFailure {
    match err {
        ExecError::Git(failure) => *failure,
        other => panic!("expected a git failure, got {other:?}"),
    }
}

/// Formatted log output collected by a thread-local subscriber.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (capture, tracing::subscriber::set_default(subscriber))
}

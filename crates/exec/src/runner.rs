// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning git and turning its outcome into a result or an error.

use std::path::Path;
use std::process::Stdio;
use std::sync::{Arc, LazyLock};
use std::time::Instant;

use gp_errors::{classify_output, describe};
use tokio::io::AsyncWriteExt;
use tokio::process::ChildStdin;
use tokio::sync::mpsc;
use tracing::Instrument;

use crate::environment::{merge_env, EnvironmentProvider, PassthroughEnvironment};
use crate::error::{ExecError, GitFailure};
use crate::measure::{measure, PerfRecorder, TracingRecorder};
use crate::observer::{LiveProcess, StreamKind};
use crate::options::{ExecOptions, ResolvedOptions};
use crate::pipeline::{collect, pump, Capture, CHANNEL_CAPACITY};
use crate::result::{ExecResult, Output};
use crate::tail::trailing;
use crate::GitConfig;

static DEFAULT_RUNNER: LazyLock<GitRunner> = LazyLock::new(GitRunner::from_env);

/// Run git with `args` in `path` using the process-wide default runner.
///
/// `operation` names the higher-level action (`"push"`, `"getStatus"`) and
/// appears in errors and logs.
pub async fn execute<S: AsRef<str>>(
    args: &[S],
    path: &Path,
    operation: &str,
    options: ExecOptions,
) -> Result<ExecResult, ExecError> {
    DEFAULT_RUNNER.execute(args, path, operation, options).await
}

/// Executes git commands against a fixed configuration and set of adapters.
#[derive(Clone)]
pub struct GitRunner {
    config: GitConfig,
    environment: Arc<dyn EnvironmentProvider>,
    recorder: Arc<dyn PerfRecorder>,
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new(GitConfig::default())
    }
}

impl std::fmt::Debug for GitRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRunner").field("config", &self.config).finish_non_exhaustive()
    }
}

impl GitRunner {
    pub fn new(config: GitConfig) -> Self {
        Self {
            config,
            environment: Arc::new(PassthroughEnvironment),
            recorder: Arc::new(TracingRecorder),
        }
    }

    /// Runner configured from `GP_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(GitConfig::from_env())
    }

    pub fn with_environment(mut self, provider: impl EnvironmentProvider) -> Self {
        self.environment = Arc::new(provider);
        self
    }

    pub fn with_recorder(mut self, recorder: impl PerfRecorder) -> Self {
        self.recorder = Arc::new(recorder);
        self
    }

    pub fn config(&self) -> &GitConfig {
        &self.config
    }

    /// Run git and apply the success / expected-error policy.
    ///
    /// Returns `Ok` when the exit code is in the success set, or when the
    /// failure classifies as one of the expected errors. Every other failure
    /// is logged once and returned as [`ExecError::Git`].
    pub async fn execute<S: AsRef<str>>(
        &self,
        args: &[S],
        path: &Path,
        operation: &str,
        options: ExecOptions,
    ) -> Result<ExecResult, ExecError> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let label = format!("git {}", args.join(" "));
        let span = tracing::info_span!(
            "git.exec",
            operation,
            args = ?args,
            path = %path.display(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let options = options.resolve(&self.config);
        let run = self.run(args, path, operation, options).instrument(span);
        measure(self.recorder.as_ref(), &label, run).await
    }

    async fn run(
        &self,
        args: Vec<String>,
        path: &Path,
        operation: &str,
        mut options: ResolvedOptions,
    ) -> Result<ExecResult, ExecError> {
        let start = Instant::now();

        let lease = self
            .environment
            .resolve(path, options.is_background_task, &options.env)
            .await
            .map_err(|source| {
                tracing::error!(operation, error = %source, "git environment unavailable");
                ExecError::Environment {
                    operation: operation.to_string(),
                    source,
                }
            })?;

        let mut command = tokio::process::Command::new(&self.config.git_executable);
        command
            .args(&args)
            .current_dir(path)
            .envs(merge_env(&options.env, &lease.vars))
            .stdin(if options.stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let spawn_error = |source: std::io::Error| {
            tracing::error!(operation, args = ?args, error = %source, "failed to run git");
            ExecError::Spawn {
                operation: operation.to_string(),
                source,
            }
        };

        let mut child = command.spawn().map_err(spawn_error)?;

        let tee = options.observer.as_ref().map(|observer| {
            let (tx, rx) = mpsc::unbounded_channel();
            observer(LiveProcess { pid: child.id(), output: rx });
            tx
        });

        let (sink, chunks) = mpsc::channel(CHANNEL_CAPACITY);
        let stdout = pump(child.stdout.take(), StreamKind::Stdout, sink.clone(), tee.clone());
        let stderr = pump(child.stderr.take(), StreamKind::Stderr, sink, tee);
        let stdin = write_stdin(child.stdin.take(), options.stdin.take());
        let collector = collect(chunks, Capture::new(options.max_buffer, options.terminal_tail));

        // Done only once the process has exited and both pipes are drained.
        let (status, stdout, stderr, stdin, captured) =
            tokio::join!(child.wait(), stdout, stderr, stdin, collector);
        drop(lease);

        let status = status.map_err(spawn_error)?;
        stdout.map_err(|source| pipe_error(operation, "read git's stdout", source))?;
        stderr.map_err(|source| pipe_error(operation, "read git's stderr", source))?;
        stdin.map_err(|source| pipe_error(operation, "write git's stdin", source))?;

        let exit_code = status.code().unwrap_or(-1);
        let span = tracing::Span::current();
        span.record("exit_code", exit_code);
        span.record("duration_ms", start.elapsed().as_millis() as u64);

        if let Some(stream) = captured.overflow {
            tracing::error!(
                operation,
                args = ?args,
                %stream,
                limit = options.max_buffer,
                "git output exceeded the maximum buffer size"
            );
            return Err(ExecError::MaxBufferExceeded {
                operation: operation.to_string(),
                limit: options.max_buffer,
                stream,
                stdout: Output::from_bytes(captured.stdout, options.encoding),
                stderr: Output::from_bytes(captured.stderr, options.encoding),
            });
        }

        let stdout = Output::from_bytes(captured.stdout, options.encoding);
        let stderr = Output::from_bytes(captured.stderr, options.encoding);

        let succeeded = options.is_success(exit_code);
        let (git_error, git_error_description) = if succeeded {
            (None, None)
        } else {
            let stderr_text = stderr.as_text();
            let code = classify_output(&stderr_text, &stdout.as_text());
            (code, code.and_then(|code| describe(code, &stderr_text)))
        };

        let result = ExecResult {
            exit_code,
            stdout,
            stderr,
            path: path.to_path_buf(),
            git_error,
            git_error_description,
            combined_output: captured.terminal_output.clone(),
        };

        if succeeded {
            return Ok(result);
        }
        if options.is_expected(git_error) {
            tracing::debug!(
                operation,
                exit_code,
                git_error = ?git_error,
                "git failed with an expected error"
            );
            return Ok(result);
        }

        let failure = GitFailure::new(operation, args, result, captured.terminal_output);
        tracing::error!(
            operation,
            args = %failure.args.join(" "),
            exit_code,
            git_error = ?git_error,
            output = %trailing(&failure.terminal_output, options.message_tail),
            "git command failed"
        );
        Err(ExecError::Git(Box::new(failure)))
    }
}

fn pipe_error(operation: &str, action: &'static str, source: std::io::Error) -> ExecError {
    tracing::error!(operation, action, error = %source, "git pipe failed");
    ExecError::Io {
        operation: operation.to_string(),
        action,
        source,
    }
}

/// Write `data` to the child's stdin and close it.
///
/// A child that exits without reading its input is not an error.
async fn write_stdin(stdin: Option<ChildStdin>, data: Option<Vec<u8>>) -> std::io::Result<()> {
    let (Some(mut stdin), Some(data)) = (stdin, data) else {
        return Ok(());
    };
    let written = match stdin.write_all(&data).await {
        Ok(()) => stdin.shutdown().await,
        Err(e) => Err(e),
    };
    drop(stdin);
    match written {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
#[path = "runner_tests/mod.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution failures.

use gp_errors::GitErrorCode;

use crate::observer::StreamKind;
use crate::result::{ExecResult, Output};

/// A git command that ran to completion but failed.
#[derive(Debug, Clone)]
pub struct GitFailure {
    /// Name of the higher-level operation, e.g. `"push"`.
    pub operation: String,
    /// Arguments passed to git.
    pub args: Vec<String>,
    pub result: ExecResult,
    /// Retained terminal-rendered output at the time of failure.
    pub terminal_output: String,
    /// Message for display: the description, or git's own text.
    pub message: String,
    /// True when `message` is git's text rather than a description.
    pub is_raw_message: bool,
}

impl GitFailure {
    pub(crate) fn new(
        operation: &str,
        args: Vec<String>,
        result: ExecResult,
        terminal_output: String,
    ) -> Self {
        let (message, is_raw_message) = if let Some(description) = &result.git_error_description {
            (description.clone(), false)
        } else if !result.stderr.is_empty() {
            (result.stderr_text().into_owned(), true)
        } else if !result.stdout.is_empty() {
            (result.stdout_text().into_owned(), true)
        } else {
            (format!("unknown error (exit code {})", result.exit_code), false)
        };
        Self {
            operation: operation.to_string(),
            args,
            result,
            terminal_output,
            message,
            is_raw_message,
        }
    }
}

/// Errors that can occur while executing a git command.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Git exited outside the success set with no expected error.
    #[error("{}", .0.message)]
    Git(Box<GitFailure>),

    /// A pipe produced more than the configured maximum. Captured output up
    /// to the limit is preserved.
    #[error("{operation}: {stream} exceeded the maximum buffer size of {limit} bytes")]
    MaxBufferExceeded {
        operation: String,
        limit: usize,
        stream: StreamKind,
        stdout: Output,
        stderr: Output,
    },

    /// The process could not be started or waited on.
    #[error("failed to execute {operation}: {source}")]
    Spawn {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Git started, but reading its output or writing its input failed.
    #[error("{operation}: failed to {action}: {source}")]
    Io {
        operation: String,
        /// What was being done, e.g. `"read git's stderr"`.
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The environment provider could not supply an environment.
    #[error("{operation}: failed to prepare environment: {source}")]
    Environment {
        operation: String,
        #[source]
        source: crate::EnvironmentError,
    },
}

impl ExecError {
    /// The classified code, for failures git itself reported.
    pub fn git_error(&self) -> Option<GitErrorCode> {
        match self {
            ExecError::Git(failure) => failure.result.git_error,
            _ => None,
        }
    }

    pub fn is_git_error(&self, code: GitErrorCode) -> bool {
        self.git_error() == Some(code)
    }

    /// The finished process, for failures git itself reported.
    pub fn result(&self) -> Option<&ExecResult> {
        match self {
            ExecError::Git(failure) => Some(&failure.result),
            _ => None,
        }
    }

    pub fn operation(&self) -> &str {
        match self {
            ExecError::Git(failure) => &failure.operation,
            ExecError::MaxBufferExceeded { operation, .. }
            | ExecError::Spawn { operation, .. }
            | ExecError::Io { operation, .. }
            | ExecError::Environment { operation, .. } => operation,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

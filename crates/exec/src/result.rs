// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of one git execution.

use std::borrow::Cow;
use std::path::PathBuf;

use gp_errors::GitErrorCode;
use serde::Serialize;

use crate::options::Encoding;

/// Captured contents of one pipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    Binary(Vec<u8>),
}

impl Output {
    pub(crate) fn from_bytes(bytes: Vec<u8>, encoding: Encoding) -> Self {
        match encoding {
            Encoding::Text => match String::from_utf8(bytes) {
                Ok(text) => Output::Text(text),
                Err(e) => Output::Text(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
            Encoding::Binary => Output::Binary(bytes),
        }
    }

    /// Text view; binary output is decoded lossily.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Output::Text(text) => Cow::Borrowed(text),
            Output::Binary(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Text(text) => text.as_bytes(),
            Output::Binary(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Output {
    fn default() -> Self {
        Output::Text(String::new())
    }
}

/// Everything known about a finished git process.
///
/// `git_error` and `git_error_description` are only ever populated when the
/// exit code fell outside the success set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: Output,
    pub stderr: Output,
    /// Working directory the command ran in.
    pub path: PathBuf,
    pub git_error: Option<GitErrorCode>,
    pub git_error_description: Option<String>,
    /// Terminal-rendered stdout and stderr, interleaved in arrival order and
    /// limited to the configured tail.
    pub combined_output: String,
}

impl ExecResult {
    /// Stdout as text (lossy for binary captures).
    pub fn stdout_text(&self) -> Cow<'_, str> {
        self.stdout.as_text()
    }

    /// Stderr as text (lossy for binary captures).
    pub fn stderr_text(&self) -> Cow<'_, str> {
        self.stderr.as_text()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-invocation options and their resolution against [`GitConfig`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use gp_errors::GitErrorCode;
use serde::Serialize;

use crate::macros::setters;
use crate::observer::{LiveProcess, ProcessObserver};
use crate::GitConfig;

/// How captured stdout/stderr are surfaced in the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Decoded as UTF-8 (lossily).
    #[default]
    Text,
    /// Raw bytes, e.g. `git cat-file blob` or `git show` of an image.
    Binary,
}

/// Caller-supplied options for one execution.
#[derive(Clone)]
pub struct ExecOptions {
    /// Exit codes treated as success. Defaults to `{0}`.
    pub success_exit_codes: HashSet<i32>,
    /// Classified failures returned as data instead of raised.
    pub expected_errors: HashSet<GitErrorCode>,
    pub encoding: Encoding,
    /// Per-stream capture cap; `None` takes the encoding's default.
    pub max_buffer: Option<usize>,
    /// Set for work the user did not start directly (periodic fetches).
    /// Forwarded to the environment provider so it can avoid prompting.
    pub is_background_task: bool,
    /// Caller environment, layered under the provider's variables.
    pub env: HashMap<String, String>,
    /// Written to the child's stdin, which is then closed.
    pub stdin: Option<Vec<u8>>,
    pub observer: Option<ProcessObserver>,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            success_exit_codes: HashSet::from([0]),
            expected_errors: HashSet::new(),
            encoding: Encoding::Text,
            max_buffer: None,
            is_background_task: false,
            env: HashMap::new(),
            stdin: None,
            observer: None,
        }
    }
}

impl fmt::Debug for ExecOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecOptions")
            .field("success_exit_codes", &self.success_exit_codes)
            .field("expected_errors", &self.expected_errors)
            .field("encoding", &self.encoding)
            .field("max_buffer", &self.max_buffer)
            .field("is_background_task", &self.is_background_task)
            .field("env", &self.env.keys().collect::<Vec<_>>())
            .field("stdin", &self.stdin.as_ref().map(Vec::len))
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    setters! {
        set {
            encoding: Encoding,
            is_background_task: bool,
        }
        option {
            max_buffer: usize,
            stdin: Vec<u8>,
        }
    }

    /// Replace the success exit codes.
    pub fn success_exit_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.success_exit_codes = codes.into_iter().collect();
        self
    }

    /// Replace the expected error codes.
    pub fn expected_errors(mut self, codes: impl IntoIterator<Item = GitErrorCode>) -> Self {
        self.expected_errors = codes.into_iter().collect();
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn observer(mut self, f: impl Fn(LiveProcess) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(f));
        self
    }

    /// Merge over process-wide defaults.
    pub fn resolve(self, config: &GitConfig) -> ResolvedOptions {
        let max_buffer = self.max_buffer.unwrap_or(match self.encoding {
            Encoding::Text => config.max_text_buffer,
            Encoding::Binary => usize::MAX,
        });
        ResolvedOptions {
            success_exit_codes: self.success_exit_codes,
            expected_errors: self.expected_errors,
            encoding: self.encoding,
            max_buffer,
            terminal_tail: config.terminal_tail,
            message_tail: config.message_tail,
            is_background_task: self.is_background_task,
            env: self.env,
            stdin: self.stdin,
            observer: self.observer,
        }
    }
}

/// Options with every default filled in.
#[derive(Clone)]
pub struct ResolvedOptions {
    pub success_exit_codes: HashSet<i32>,
    pub expected_errors: HashSet<GitErrorCode>,
    pub encoding: Encoding,
    /// `usize::MAX` when unbounded.
    pub max_buffer: usize,
    pub terminal_tail: usize,
    pub message_tail: usize,
    pub is_background_task: bool,
    pub env: HashMap<String, String>,
    pub stdin: Option<Vec<u8>>,
    pub observer: Option<ProcessObserver>,
}

impl ResolvedOptions {
    pub fn is_success(&self, exit_code: i32) -> bool {
        self.success_exit_codes.contains(&exit_code)
    }

    pub fn is_expected(&self, code: Option<GitErrorCode>) -> bool {
        code.is_some_and(|code| self.expected_errors.contains(&code))
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

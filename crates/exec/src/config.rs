// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide execution defaults and their environment overrides.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tail::DEFAULT_TAIL_CAPACITY;

/// Default cap on each captured text stream.
pub const DEFAULT_MAX_TEXT_BUFFER: usize = 50 * 1024 * 1024;

/// Default length of the output excerpt placed in failure messages and logs.
pub const DEFAULT_MESSAGE_TAIL: usize = 1024;

/// Defaults every execution is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Executable invoked for every command.
    pub git_executable: PathBuf,
    /// Per-stream cap for text output. Binary output is never capped by default.
    pub max_text_buffer: usize,
    /// Bytes of terminal-rendered output retained for failure context.
    pub terminal_tail: usize,
    /// Bytes of that context quoted in failure messages and logs.
    pub message_tail: usize,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            git_executable: PathBuf::from("git"),
            max_text_buffer: DEFAULT_MAX_TEXT_BUFFER,
            terminal_tail: DEFAULT_TAIL_CAPACITY,
            message_tail: DEFAULT_MESSAGE_TAIL,
        }
    }
}

impl GitConfig {
    /// Defaults with `GP_*` environment overrides applied.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            git_executable: git_executable().unwrap_or(defaults.git_executable),
            max_text_buffer: max_buffer_bytes().unwrap_or(defaults.max_text_buffer),
            terminal_tail: terminal_tail_bytes().unwrap_or(defaults.terminal_tail),
            message_tail: message_tail_bytes().unwrap_or(defaults.message_tail),
        }
    }
}

/// Git executable override (`GP_GIT_EXECUTABLE`).
pub fn git_executable() -> Option<PathBuf> {
    std::env::var("GP_GIT_EXECUTABLE").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Text buffer cap override (`GP_MAX_BUFFER_BYTES`).
pub fn max_buffer_bytes() -> Option<usize> {
    parse_bytes("GP_MAX_BUFFER_BYTES")
}

/// Terminal tail override (`GP_TERMINAL_TAIL_BYTES`).
pub fn terminal_tail_bytes() -> Option<usize> {
    parse_bytes("GP_TERMINAL_TAIL_BYTES")
}

/// Message excerpt override (`GP_MESSAGE_TAIL_BYTES`).
pub fn message_tail_bytes() -> Option<usize> {
    parse_bytes("GP_MESSAGE_TAIL_BYTES")
}

fn parse_bytes(var: &str) -> Option<usize> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(var, value = %raw, error = %e, "ignoring malformed byte count");
            None
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying the exit code `gp` should terminate with.

use std::fmt;

/// Exit code when git could not be started at all.
pub const SPAWN_FAILED: i32 = 127;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr by `main` unless empty.
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gp-errors: recognition and description of git's own failure output.
//!
//! Git reports failures as free-form prose on stderr. This crate maps that
//! prose onto [`GitErrorCode`], a closed set of failure categories callers
//! can branch on, and onto human-facing descriptions of those categories.

mod macros;

mod classify;
mod code;
mod describe;
mod parse;

pub use classify::{classify, classify_output};
pub use code::{GitErrorCode, UnknownErrorCode};
pub use describe::describe;
pub use parse::{
    parse_bad_config_value, parse_config_lock_file_path, parse_oversized_files, BadConfigValue,
};

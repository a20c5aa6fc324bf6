// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gp-exec: run git as a child process and report what happened.
//!
//! [`execute`] spawns git, captures stdout and stderr without deadlocking,
//! keeps a terminal-rendered tail of the combined output for diagnostics,
//! and classifies failures with [`gp_errors`]. Callers decide which exit
//! codes count as success and which classified failures come back as data.

mod macros;

mod config;
mod environment;
mod error;
mod measure;
mod observer;
mod options;
mod pipeline;
mod result;
mod runner;
mod tail;
mod terminal;

pub use config::{GitConfig, DEFAULT_MAX_TEXT_BUFFER, DEFAULT_MESSAGE_TAIL};
pub use environment::{
    merge_env, EnvironmentError, EnvironmentLease, EnvironmentProvider, PassthroughEnvironment,
    FORCED_TERM,
};
pub use error::{ExecError, GitFailure};
pub use measure::{PerfRecorder, TracingRecorder};
pub use observer::{LiveProcess, OutputChunk, ProcessObserver, StreamKind};
pub use options::{Encoding, ExecOptions, ResolvedOptions};
pub use result::{ExecResult, Output};
pub use runner::{execute, GitRunner};
pub use tail::{trailing, TailBuffer, DEFAULT_TAIL_CAPACITY};
pub use terminal::TerminalOutput;

pub use gp_errors::GitErrorCode;

#[cfg(any(test, feature = "test-support"))]
pub use environment::{EnvironmentCall, FakeEnvironment};
#[cfg(any(test, feature = "test-support"))]
pub use measure::RecordingRecorder;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live view of a running git process for callers that parse progress.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

/// Which pipe a chunk was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        })
    }
}

/// Raw bytes read from one of the child's pipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
    pub stream: StreamKind,
    pub bytes: Vec<u8>,
}

/// Handle given to an observer once the child has spawned.
///
/// `output` receives a copy of every chunk the capture pipeline reads. The
/// channel is unbounded, so a slow or absent consumer never stalls capture;
/// dropping the receiver simply stops the copies.
#[derive(Debug)]
pub struct LiveProcess {
    pub pid: Option<u32>,
    pub output: mpsc::UnboundedReceiver<OutputChunk>,
}

/// Callback invoked with the [`LiveProcess`] right after spawn.
pub type ProcessObserver = Arc<dyn Fn(LiveProcess) + Send + Sync>;

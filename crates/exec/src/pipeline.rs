// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capture of a running child's stdout and stderr.
//!
//! One pump per pipe reads chunks and forwards them to a single collector,
//! which owns the raw buffers, the terminal renderer and the tail window.
//! Chunks from the two pipes are interleaved in arrival order; there is no
//! stronger ordering guarantee between them.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

use crate::observer::{OutputChunk, StreamKind};
use crate::tail::{trailing, TailBuffer};
use crate::terminal::TerminalOutput;

const READ_CHUNK: usize = 8 * 1024;

/// Chunks in flight between the pumps and the collector.
pub(crate) const CHANNEL_CAPACITY: usize = 64;

/// Everything captured once both pipes have closed.
#[derive(Debug)]
pub(crate) struct Captured {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Tail of the terminal-rendered, interleaved output.
    pub terminal_output: String,
    /// First pipe that went over the buffer limit.
    pub overflow: Option<StreamKind>,
}

/// Single-writer accumulator fed by the pumps.
#[derive(Debug)]
pub(crate) struct Capture {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
    stdout_text: Utf8Decoder,
    stderr_text: Utf8Decoder,
    terminal: TerminalOutput,
    tail: TailBuffer,
    max_buffer: usize,
    overflow: Option<StreamKind>,
}

impl Capture {
    pub(crate) fn new(max_buffer: usize, tail_capacity: usize) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: Vec::new(),
            stdout_text: Utf8Decoder::default(),
            stderr_text: Utf8Decoder::default(),
            terminal: TerminalOutput::with_line_limit(tail_capacity),
            tail: TailBuffer::new(tail_capacity),
            max_buffer,
            overflow: None,
        }
    }

    /// Each pipe is capped on its own; a full pipe does not stop the other.
    pub(crate) fn accept(&mut self, chunk: &OutputChunk) {
        let buf = match chunk.stream {
            StreamKind::Stdout => &mut self.stdout,
            StreamKind::Stderr => &mut self.stderr,
        };
        let room = self.max_buffer.saturating_sub(buf.len());
        if chunk.bytes.len() > room {
            buf.extend_from_slice(&chunk.bytes[..room]);
            self.overflow = self.overflow.or(Some(chunk.stream));
        } else {
            buf.extend_from_slice(&chunk.bytes);
        }

        let text = match chunk.stream {
            StreamKind::Stdout => self.stdout_text.decode(&chunk.bytes),
            StreamKind::Stderr => self.stderr_text.decode(&chunk.bytes),
        };
        self.render(&text);
    }

    /// Terminal view so far, including the open line.
    pub(crate) fn snapshot(&self) -> String {
        let mut view = self.tail.snapshot().to_string();
        view.push_str(&self.terminal.current_line());
        trailing(&view, self.tail.capacity()).to_string()
    }

    pub(crate) fn finish(mut self) -> Captured {
        let rest = self.stdout_text.finish() + &self.stderr_text.finish();
        self.render(&rest);
        let terminal_output = self.snapshot();
        Captured {
            stdout: self.stdout,
            stderr: self.stderr,
            terminal_output,
            overflow: self.overflow,
        }
    }

    fn render(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.terminal.push(text);
        for line in self.terminal.take_completed() {
            self.tail.append(&line);
            self.tail.append("\n");
        }
    }
}

/// Incremental UTF-8 decoding that tolerates characters split across reads.
#[derive(Debug, Default)]
struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut out = String::new();
        loop {
            match std::str::from_utf8(&self.pending) {
                Ok(text) => {
                    out.push_str(text);
                    self.pending.clear();
                    return out;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            self.pending.drain(..valid + len);
                        }
                        // Incomplete sequence at the end; wait for more bytes.
                        None => {
                            self.pending.drain(..valid);
                            return out;
                        }
                    }
                }
            }
        }
    }

    fn finish(&mut self) -> String {
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        rest
    }
}

/// Read `reader` to EOF, forwarding each chunk to the collector and to the
/// observer's copy channel if there is one.
pub(crate) async fn pump<R>(
    reader: Option<R>,
    stream: StreamKind,
    sink: mpsc::Sender<OutputChunk>,
    tee: Option<mpsc::UnboundedSender<OutputChunk>>,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(());
    };
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        let chunk = OutputChunk {
            stream,
            bytes: buf[..n].to_vec(),
        };
        if let Some(tee) = &tee {
            // Observer went away; capture carries on regardless.
            let _ = tee.send(chunk.clone());
        }
        if sink.send(chunk).await.is_err() {
            return Ok(());
        }
    }
}

/// Drain chunks until every pump has hung up.
pub(crate) async fn collect(
    mut rx: mpsc::Receiver<OutputChunk>,
    mut capture: Capture,
) -> Captured {
    while let Some(chunk) = rx.recv().await {
        capture.accept(&chunk);
    }
    capture.finish()
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

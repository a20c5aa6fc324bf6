// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal-style rendering of a live output stream.
//!
//! Git redraws progress lines by writing `\r` and overwriting the line in
//! place. [`TerminalOutput`] replays those writes the way a terminal would,
//! so the text kept for diagnostics is the final state of each line rather
//! than every intermediate percentage.

use std::collections::VecDeque;

/// What a terminal would currently display for a stream of chunks.
#[derive(Debug, Default)]
pub struct TerminalOutput {
    completed: VecDeque<String>,
    line: Vec<char>,
    cursor: usize,
    /// A `\r` was seen and the next character decides whether it was `\r\n`.
    pending_cr: bool,
    line_limit: Option<usize>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the open line to roughly its last `limit` characters.
    ///
    /// Output with no line breaks at all (binary blobs, single-line dumps)
    /// would otherwise accumulate in the open line without bound.
    pub fn with_line_limit(limit: usize) -> Self {
        Self { line_limit: Some(limit.max(1)), ..Self::default() }
    }

    /// Render a complete input in one go.
    pub fn render(input: &str) -> String {
        let mut terminal = Self::new();
        terminal.push(input);
        terminal.finish()
    }

    /// Feed the next chunk, in arrival order.
    pub fn push(&mut self, chunk: &str) {
        for ch in chunk.chars() {
            if self.pending_cr {
                self.pending_cr = false;
                if ch == '\n' {
                    self.end_line();
                    continue;
                }
                self.cursor = 0;
            }
            match ch {
                '\n' => self.end_line(),
                '\r' => self.pending_cr = true,
                _ => self.put(ch),
            }
        }
    }

    /// Drain the lines finalized since the last call, oldest first.
    pub fn take_completed(&mut self) -> impl Iterator<Item = String> + '_ {
        self.completed.drain(..)
    }

    /// Lines finalized and not yet taken.
    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    /// The open line as currently displayed, with an unresolved `\r` kept.
    pub fn current_line(&self) -> String {
        let mut line: String = self.line.iter().collect();
        if self.pending_cr {
            line.push('\r');
        }
        line
    }

    /// Freeze into plain text: untaken lines joined by `\n`, then the open line.
    pub fn finish(self) -> String {
        let current = self.current_line();
        let mut out = String::new();
        for line in &self.completed {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&current);
        out
    }

    fn put(&mut self, ch: char) {
        if self.cursor < self.line.len() {
            self.line[self.cursor] = ch;
        } else {
            self.line.push(ch);
        }
        self.cursor += 1;

        if let Some(limit) = self.line_limit {
            // Trim in batches so a long line is not shifted on every character.
            if self.line.len() > limit.saturating_mul(2) {
                let excess = self.line.len() - limit;
                self.line.drain(..excess);
                self.cursor = self.cursor.saturating_sub(excess);
            }
        }
    }

    fn end_line(&mut self) {
        self.completed.push_back(self.line.drain(..).collect());
        self.cursor = 0;
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;

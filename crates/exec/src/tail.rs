// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity trailing window over a text stream.

/// Default window retained for failure context.
pub const DEFAULT_TAIL_CAPACITY: usize = 256 * 1024;

/// Keeps the last `capacity` bytes of everything appended.
///
/// The window never splits a UTF-8 character, so it may hold a few bytes
/// less than `capacity`. Discarded text is reclaimed in batches, which keeps
/// the backing allocation under twice the capacity.
#[derive(Debug, Clone)]
pub struct TailBuffer {
    buf: String,
    start: usize,
    capacity: usize,
}

impl TailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self { buf: String::new(), start: 0, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn append(&mut self, text: &str) {
        if text.len() >= self.capacity {
            self.buf.clear();
            self.buf.push_str(trailing(text, self.capacity));
            self.start = 0;
            return;
        }

        self.buf.push_str(text);
        let retained = self.buf.len() - self.start;
        if retained > self.capacity {
            let mut start = self.buf.len() - self.capacity;
            while !self.buf.is_char_boundary(start) {
                start += 1;
            }
            self.start = start;
        }
        if self.start > self.capacity {
            self.buf.drain(..self.start);
            self.start = 0;
        }
    }

    /// The retained window.
    pub fn snapshot(&self) -> &str {
        &self.buf[self.start..]
    }

    pub fn len(&self) -> usize {
        self.buf.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAIL_CAPACITY)
    }
}

/// The last `max` bytes of `text`, starting on a character boundary.
pub fn trailing(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut start = text.len() - max;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}

#[cfg(test)]
#[path = "tail_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn chunk(stream: StreamKind, text: &str) -> OutputChunk {
    OutputChunk {
        stream,
        bytes: text.as_bytes().to_vec(),
    }
}

#[test]
fn keeps_streams_apart_and_interleaves_terminal_view() {
    let mut capture = Capture::new(usize::MAX, 1024);
    capture.accept(&chunk(StreamKind::Stdout, "one\n"));
    capture.accept(&chunk(StreamKind::Stderr, "two\n"));
    capture.accept(&chunk(StreamKind::Stdout, "three\n"));
    let captured = capture.finish();

    assert_eq!(captured.stdout, b"one\nthree\n");
    assert_eq!(captured.stderr, b"two\n");
    assert_eq!(captured.terminal_output, "one\ntwo\nthree\n");
    assert_eq!(captured.overflow, None);
}

#[test]
fn progress_lines_collapse() {
    let mut capture = Capture::new(usize::MAX, 1024);
    capture.accept(&chunk(StreamKind::Stderr, "Receiving objects:  10%\r"));
    capture.accept(&chunk(StreamKind::Stderr, "Receiving objects: 100%\r\n"));
    let captured = capture.finish();
    assert_eq!(captured.terminal_output, "Receiving objects: 100%\n");
    assert_eq!(captured.stderr, b"Receiving objects:  10%\rReceiving objects: 100%\r\n");
}

#[test]
fn open_line_is_part_of_snapshot() {
    let mut capture = Capture::new(usize::MAX, 1024);
    capture.accept(&chunk(StreamKind::Stdout, "done\npartial"));
    assert_eq!(capture.snapshot(), "done\npartial");
    assert_eq!(capture.finish().terminal_output, "done\npartial");
}

#[test]
fn overflow_truncates_and_records_stream() {
    let mut capture = Capture::new(4, 1024);
    capture.accept(&chunk(StreamKind::Stderr, "ab"));
    capture.accept(&chunk(StreamKind::Stderr, "cdef"));
    capture.accept(&chunk(StreamKind::Stderr, "gh"));
    let captured = capture.finish();

    assert_eq!(captured.stderr, b"abcd");
    assert_eq!(captured.overflow, Some(StreamKind::Stderr));
}

#[test]
fn other_stream_keeps_filling_after_overflow() {
    let mut capture = Capture::new(4, 1024);
    capture.accept(&chunk(StreamKind::Stdout, "way too much"));
    capture.accept(&chunk(StreamKind::Stderr, "fat"));
    capture.accept(&chunk(StreamKind::Stderr, "al: x\n"));
    let captured = capture.finish();

    assert_eq!(captured.stdout, b"way ");
    assert_eq!(captured.stderr, b"fata");
    assert_eq!(captured.overflow, Some(StreamKind::Stdout));
}

#[test]
fn first_overflowing_stream_is_recorded() {
    let mut capture = Capture::new(2, 1024);
    capture.accept(&chunk(StreamKind::Stderr, "abc"));
    capture.accept(&chunk(StreamKind::Stdout, "xyz"));
    let captured = capture.finish();

    assert_eq!(captured.stdout, b"xy");
    assert_eq!(captured.overflow, Some(StreamKind::Stderr));
}

#[test]
fn exact_limit_is_not_overflow() {
    let mut capture = Capture::new(4, 1024);
    capture.accept(&chunk(StreamKind::Stdout, "abcd"));
    assert_eq!(capture.finish().overflow, None);
}

#[test]
fn terminal_view_is_bounded() {
    let mut capture = Capture::new(usize::MAX, 32);
    for i in 0..100 {
        capture.accept(&chunk(StreamKind::Stdout, &format!("line {i}\n")));
    }
    let captured = capture.finish();
    assert!(captured.terminal_output.len() <= 32);
    assert!(captured.terminal_output.ends_with("line 99\n"));
}

#[test]
fn split_multibyte_character_survives() {
    let bytes = "héllo\n".as_bytes();
    let mut capture = Capture::new(usize::MAX, 1024);
    capture.accept(&OutputChunk { stream: StreamKind::Stdout, bytes: bytes[..2].to_vec() });
    capture.accept(&OutputChunk { stream: StreamKind::Stdout, bytes: bytes[2..].to_vec() });
    assert_eq!(capture.finish().terminal_output, "héllo\n");
}

#[test]
fn invalid_bytes_become_replacement_characters() {
    let mut capture = Capture::new(usize::MAX, 1024);
    capture.accept(&OutputChunk {
        stream: StreamKind::Stdout,
        bytes: vec![b'a', 0xff, b'b', b'\n'],
    });
    assert_eq!(capture.finish().terminal_output, "a\u{FFFD}b\n");
}

#[tokio::test]
async fn pumps_feed_collector_and_tee() {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (tee_tx, mut tee_rx) = mpsc::unbounded_channel();

    let out = pump(Some(&b"hello\n"[..]), StreamKind::Stdout, tx.clone(), Some(tee_tx.clone()));
    let err = pump(Some(&b"oops\n"[..]), StreamKind::Stderr, tx, Some(tee_tx));
    let collector = collect(rx, Capture::new(usize::MAX, 1024));
    let (out, err, captured) = tokio::join!(out, err, collector);

    out.unwrap();
    err.unwrap();
    assert_eq!(captured.stdout, b"hello\n");
    assert_eq!(captured.stderr, b"oops\n");

    let mut teed = Vec::new();
    while let Some(chunk) = tee_rx.recv().await {
        teed.push(chunk);
    }
    assert_eq!(teed.len(), 2);
    assert!(teed.iter().any(|c| c.stream == StreamKind::Stderr && c.bytes == b"oops\n"));
}

#[tokio::test]
async fn missing_pipe_is_empty() {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let pumped = pump(None::<&[u8]>, StreamKind::Stdout, tx, None);
    let (pumped, captured) = tokio::join!(pumped, collect(rx, Capture::new(usize::MAX, 1024)));
    pumped.unwrap();
    assert!(captured.stdout.is_empty());
    assert_eq!(captured.terminal_output, "");
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_accept_only_exit_zero() {
    let resolved = ExecOptions::default().resolve(&GitConfig::default());
    assert!(resolved.is_success(0));
    assert!(!resolved.is_success(1));
    assert!(resolved.expected_errors.is_empty());
    assert!(!resolved.is_expected(Some(GitErrorCode::NothingToCommit)));
    assert!(!resolved.is_expected(None));
}

#[yare::parameterized(
    text = { Encoding::Text, 50 * 1024 * 1024 },
    binary = { Encoding::Binary, usize::MAX },
)]
fn max_buffer_defaults_by_encoding(encoding: Encoding, expected: usize) {
    let resolved = ExecOptions::new().encoding(encoding).resolve(&GitConfig::default());
    assert_eq!(resolved.max_buffer, expected);
}

#[test]
fn explicit_max_buffer_wins() {
    let resolved = ExecOptions::new()
        .encoding(Encoding::Binary)
        .max_buffer(10usize)
        .resolve(&GitConfig::default());
    assert_eq!(resolved.max_buffer, 10);
}

#[test]
fn config_supplies_tail_sizes() {
    let config = GitConfig { terminal_tail: 99, message_tail: 7, ..GitConfig::default() };
    let resolved = ExecOptions::new().resolve(&config);
    assert_eq!(resolved.terminal_tail, 99);
    assert_eq!(resolved.message_tail, 7);
}

#[test]
fn caller_choices_survive_resolution() {
    let resolved = ExecOptions::new()
        .success_exit_codes([0, 1])
        .expected_errors([GitErrorCode::NothingToCommit])
        .is_background_task(true)
        .env("GIT_AUTHOR_NAME", "Ada")
        .stdin(b"input".to_vec())
        .resolve(&GitConfig::default());

    assert!(resolved.is_success(1));
    assert!(resolved.is_expected(Some(GitErrorCode::NothingToCommit)));
    assert!(!resolved.is_expected(Some(GitErrorCode::BadRevision)));
    assert!(resolved.is_background_task);
    assert_eq!(resolved.env.get("GIT_AUTHOR_NAME").map(String::as_str), Some("Ada"));
    assert_eq!(resolved.stdin.as_deref(), Some(b"input".as_slice()));
}

#[test]
fn debug_omits_env_values() {
    let options = ExecOptions::new().env("TOKEN", "secret");
    let debug = format!("{options:?}");
    assert!(debug.contains("TOKEN"));
    assert!(!debug.contains("secret"));
}

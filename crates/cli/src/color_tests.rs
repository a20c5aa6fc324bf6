// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color();
    let debug = format!("{:?}", styles());
    assert_ne!(debug, format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    disable_color();
    assert_eq!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn header_produces_ansi_when_color_forced() {
    force_color();
    let result = header("PushNotFastForward");
    assert!(result.starts_with("\x1b[38;5;74m"), "expected ANSI header color");
    assert!(result.contains("PushNotFastForward"));
    assert!(result.ends_with("\x1b[0m"), "expected ANSI reset");
}

#[test]
#[serial]
fn context_and_muted_use_their_codes() {
    force_color();
    assert!(context("desc").contains("\x1b[38;5;245m"));
    assert!(muted("push").contains("\x1b[38;5;240m"));
}

#[test]
#[serial]
fn no_color_returns_plain_text() {
    disable_color();
    assert_eq!(header("x"), "x");
    assert_eq!(context("y"), "y");
    assert_eq!(muted("z"), "z");
}

#[test]
#[serial]
fn no_color_beats_forced_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::set_var("COLOR", "1");
    assert!(!should_colorize());
    std::env::remove_var("COLOR");
}

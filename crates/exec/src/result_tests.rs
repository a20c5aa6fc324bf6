// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn text_encoding_decodes_lossily() {
    let output = Output::from_bytes(vec![b'o', b'k', 0xff], Encoding::Text);
    assert_eq!(output, Output::Text("ok\u{fffd}".to_string()));
}

#[test]
fn binary_encoding_keeps_bytes() {
    let output = Output::from_bytes(vec![0, 159, 146, 150], Encoding::Binary);
    assert_eq!(output.as_bytes(), &[0, 159, 146, 150]);
    assert_eq!(output.len(), 4);
}

#[test]
fn binary_has_a_text_view() {
    let output = Output::Binary(b"hello".to_vec());
    assert_eq!(output.as_text(), "hello");
}

#[test]
fn default_output_is_empty_text() {
    let output = Output::default();
    assert!(output.is_empty());
    assert_eq!(output, Output::Text(String::new()));
}

#[test]
fn serializes_text_as_plain_string() {
    let result = ExecResult {
        exit_code: 1,
        stdout: Output::Text(String::new()),
        stderr: Output::Text("fatal: bad revision 'x'\n".to_string()),
        path: PathBuf::from("/r"),
        git_error: Some(GitErrorCode::BadRevision),
        git_error_description: Some("Bad revision.".to_string()),
        combined_output: "fatal: bad revision 'x'\n".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stderr"], "fatal: bad revision 'x'\n");
    assert_eq!(json["git_error"], "BadRevision");
    assert_eq!(json["exit_code"], 1);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter extraction from specific git diagnostics.

use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use crate::classify::{BAD_CONFIG_VALUE_PATTERN, CONFIG_LOCK_PATTERN};

#[allow(clippy::expect_used)]
static CONFIG_LOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONFIG_LOCK_PATTERN).expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static BAD_CONFIG_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BAD_CONFIG_VALUE_PATTERN).expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static OVERSIZED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^remote: error: File (.+) is (.+); this exceeds .+'s file size limit of .+$")
        .expect("constant regex pattern is valid")
});

/// Key and offending value from a "bad config value" failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadConfigValue {
    pub key: String,
    pub value: String,
}

/// Path of the lock file named by a "could not lock config file" failure.
///
/// Git reports the config file itself (`/r/.git/config`); the file blocking
/// the operation is its `.lock` sibling, which is what this returns.
pub fn parse_config_lock_file_path(stderr: &str) -> Option<PathBuf> {
    let captures = CONFIG_LOCK.captures(stderr)?;
    let path = normalize(Path::new(captures.get(1)?.as_str()));
    let mut lock = path.into_os_string();
    lock.push(".lock");
    Some(PathBuf::from(lock))
}

/// Key and value from `fatal: bad numeric|boolean config value 'V' for 'K'`.
pub fn parse_bad_config_value(stderr: &str) -> Option<BadConfigValue> {
    let captures = BAD_CONFIG_VALUE.captures(stderr)?;
    Some(BadConfigValue {
        value: captures.get(1)?.as_str().to_string(),
        key: captures.get(2)?.as_str().to_string(),
    })
}

/// Files a remote rejected for exceeding its size limit, in report order.
pub fn parse_oversized_files(stderr: &str) -> Vec<String> {
    OVERSIZED_FILE
        .captures_iter(stderr)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Lexically collapse `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for specs.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub use gp_exec::{execute, ExecError, ExecOptions, GitErrorCode};

/// True when a `git` binary can be run.
pub fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok_and(|o| o.status.success())
}

/// Return early from a spec when git is missing.
macro_rules! require_git {
    () => {
        if !$crate::prelude::git_available() {
            eprintln!("skipping: git not available");
            return;
        }
    };
}
pub(crate) use require_git;

/// A throwaway repository with a committer identity configured.
pub struct Repo {
    dir: TempDir,
}

impl Repo {
    pub fn init() -> Self {
        let repo = Self { dir: tempfile::tempdir().unwrap() };
        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Spec Runner"]);
        repo.git(&["config", "user.email", "specs@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// A repository with one commit on `main`.
    pub fn with_commit() -> Self {
        let repo = Self::init();
        repo.file("README", "hello\n");
        repo.git(&["add", "README"]);
        repo.git(&["commit", "-q", "-m", "initial"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str, content: &str) {
        std::fs::write(self.path().join(relative), content).unwrap();
    }

    /// Run git directly for setup; panics on failure.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git").args(args).current_dir(self.path()).output().unwrap();
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run the `gp` binary in this repository, or `None` when it was not built.
    pub fn gp(&self, args: &[&str]) -> Option<Output> {
        let mut cmd = assert_cmd::Command::cargo_bin("gp").ok()?;
        cmd.arg("-C").arg(self.path()).args(args).env("NO_COLOR", "1").env_remove("GP_LOG");
        Some(cmd.output().unwrap())
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Printing an execution outcome and choosing the exit code.

use std::io::Write;

use clap::ValueEnum;
use gp_errors::{parse_config_lock_file_path, parse_oversized_files};
use gp_exec::{ExecError, ExecResult, GitErrorCode};
use serde::Serialize;

use crate::exit_error::{ExitError, SPAWN_FAILED};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable form of an outcome.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a ExecResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub kind: &'static str,
    pub operation: &'a str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_output: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a Result<ExecResult, ExecError>) -> Self {
        match outcome {
            Ok(result) => Self { ok: true, result: Some(result), error: None },
            Err(err) => {
                let (kind, terminal_output) = match err {
                    ExecError::Git(failure) => ("git", Some(failure.terminal_output.as_str())),
                    ExecError::MaxBufferExceeded { .. } => ("max_buffer_exceeded", None),
                    ExecError::Spawn { .. } => ("spawn", None),
                    ExecError::Io { .. } => ("io", None),
                    ExecError::Environment { .. } => ("environment", None),
                };
                Self {
                    ok: false,
                    result: err.result(),
                    error: Some(ErrorReport {
                        kind,
                        operation: err.operation(),
                        message: err.to_string(),
                        terminal_output,
                        details: err.result().map(details).unwrap_or_default(),
                    }),
                }
            }
        }
    }
}

/// Exit code `gp` terminates with for `outcome`.
pub fn exit_code(outcome: &Result<ExecResult, ExecError>) -> i32 {
    match outcome {
        Ok(result) => result.exit_code,
        // Zero can be outside a custom success set.
        Err(ExecError::Git(failure)) => match failure.result.exit_code {
            0 => 1,
            code => code,
        },
        Err(ExecError::Spawn { .. }) => SPAWN_FAILED,
        Err(_) => 1,
    }
}

/// Extra lines worth showing for some classified failures.
pub fn details(result: &ExecResult) -> Vec<String> {
    let stderr = result.stderr_text();
    match result.git_error {
        Some(GitErrorCode::PushWithFileSizeExceedingLimit) => parse_oversized_files(&stderr),
        Some(GitErrorCode::ConfigLockFileAlreadyExists) => {
            match parse_config_lock_file_path(&stderr) {
                Some(path) => vec![format!(
                    "remove {} if no other git process is running",
                    path.display()
                )],
                None => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// Print `outcome`; a non-zero exit code comes back as an [`ExitError`].
pub fn print_outcome(
    outcome: &Result<ExecResult, ExecError>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let message = match (outcome, format) {
        (Err(err), OutputFormat::Text) if !matches!(err, ExecError::Git(_)) => err.to_string(),
        _ => String::new(),
    };
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&Report::new(outcome))?),
        OutputFormat::Text => print_text(outcome)?,
    }
    match exit_code(outcome) {
        0 => Ok(()),
        code => Err(ExitError::new(code, message).into()),
    }
}

fn print_text(outcome: &Result<ExecResult, ExecError>) -> std::io::Result<()> {
    let result = match outcome {
        Ok(result) => result,
        Err(ExecError::Git(failure)) => &failure.result,
        Err(ExecError::MaxBufferExceeded { stdout, stderr, .. }) => {
            std::io::stdout().write_all(stdout.as_bytes())?;
            std::io::stderr().write_all(stderr.as_bytes())?;
            return Ok(());
        }
        Err(_) => return Ok(()),
    };

    std::io::stdout().write_all(result.stdout.as_bytes())?;
    std::io::stderr().write_all(result.stderr.as_bytes())?;

    let Some(code) = result.git_error else {
        return Ok(());
    };
    let mut stderr = std::io::stderr().lock();
    match &result.git_error_description {
        Some(description) => writeln!(
            stderr,
            "{} {}",
            crate::color::header(code.as_str()),
            crate::color::context(description)
        )?,
        None => writeln!(stderr, "{}", crate::color::header(code.as_str()))?,
    }
    for line in details(result) {
        writeln!(stderr, "  {}", crate::color::muted(&line))?;
    }
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gp: run one git command through gp-exec and show how it went.

mod color;
mod exit_error;
mod output;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gp_exec::{Encoding, ExecOptions, GitErrorCode};
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "gp",
    version,
    about = "Run a git command and classify its failure",
    styles = color::styles()
)]
struct Cli {
    /// Run git in DIR instead of the current directory
    #[arg(short = 'C', value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Operation name shown in errors and logs
    #[arg(long, default_value = "git")]
    name: String,

    /// Exit code treated as success (repeatable, default 0)
    #[arg(long = "success-code", value_name = "N", allow_negative_numbers = true)]
    success_codes: Vec<i32>,

    /// Error code returned as data instead of failing, e.g. NothingToCommit (repeatable)
    #[arg(long = "expect", value_name = "CODE")]
    expected: Vec<GitErrorCode>,

    /// Capture output as raw bytes
    #[arg(long)]
    binary: bool,

    /// Forward this process's stdin to git
    #[arg(long)]
    stdin: bool,

    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Arguments passed to git
    #[arg(last = true, required = true, value_name = "GIT_ARGS")]
    args: Vec<String>,
}

impl Cli {
    fn exec_options(&self, stdin: Option<Vec<u8>>) -> ExecOptions {
        let mut options = ExecOptions::new().expected_errors(self.expected.iter().copied());
        if !self.success_codes.is_empty() {
            options = options.success_exit_codes(self.success_codes.iter().copied());
        }
        if self.binary {
            options = options.encoding(Encoding::Binary);
        }
        if let Some(input) = stdin {
            options = options.stdin(input);
        }
        options
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    let stdin = if cli.stdin {
        let mut input = Vec::new();
        std::io::stdin().read_to_end(&mut input)?;
        Some(input)
    } else {
        None
    };
    let options = cli.exec_options(stdin);

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let execution = gp_exec::execute(cli.args.as_slice(), &cli.dir, &cli.name, options);
    let outcome = runtime.block_on(execution);
    output::print_outcome(&outcome, cli.output)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kwtrie CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use kwtrie::cli::Cli;
use kwtrie::error::ExitCode;

mod cmd_search;

fn init_logging() {
    let filter = EnvFilter::try_from_env("KWTRIE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("kwtrie: {}", e);
            match e.downcast_ref::<kwtrie::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(command) => cmd_search::run(&cli, command),
    }
}

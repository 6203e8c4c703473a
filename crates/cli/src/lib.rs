// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wfrs - Command-line client for a remote job orchestration service.
//!
//! This crate provides the functionality behind the `wf` CLI: turning
//! filter and order expressions into structured list requests, sending them
//! to the job service, and rendering the returned jobs.
//!
//! # Main Components
//!
//! - [`query`] - Filter (`phase==running`) and order (`name:desc`) expression parsers
//! - [`client`] - Framed JSON client for the job service
//! - [`Config`] - Service address and timeout configuration
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use wfrs::query::{parse_filters, parse_orders};
//! use wf_core::ListJobsRequest;
//!
//! let filter = parse_filters(&["phase==running", "repo.repo|=werft"])?;
//! let order = parse_orders(&["name:desc"])?;
//! let request = ListJobsRequest::new(filter, order, 50, 0)?;
//! ```

mod cli;
pub mod client;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod query;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, JobCommand, OutputFormat, PageArgs};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::ServiceTarget;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Job(JobCommand::List {
            filter,
            page,
            order,
            output,
        }) => {
            let config = Config::discover(cli.config.as_deref())?;
            let target = ServiceTarget::resolve(&config, cli.host.as_deref());
            commands::job::list(&target, &filter, &order, &page, output)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "wf", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log filter directive for a `-v` count, used when `WF_LOG` is unset.
pub fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Returns the `WF_LOG` filter directive, if set.
pub fn log_filter_from_env() -> Option<String> {
    env::log_filter()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

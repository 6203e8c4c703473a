// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::help;
use crate::query::DEFAULT_ORDER;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::PageArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "wf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query jobs on a remote job orchestration service")]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Job service address (hostname:port)
    #[arg(long, global = true, value_name = "host")]
    pub host: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect jobs
    #[command(subcommand)]
    Job(JobCommand),

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
        wf completion bash > ~/.local/share/bash-completion/completions/wf\n  \
        wf completion zsh > ~/.zfunc/_wf")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Lists and searches for jobs
    #[command(
        long_about = "Lists and searches for jobs using search expressions in the form of \"<key><op><value>\"."
    )]
    #[command(after_help = help::job_list())]
    List {
        /// Filter expressions, e.g. phase==running
        #[arg(value_name = "EXPR")]
        filter: Vec<String>,

        #[command(flatten)]
        page: PageArgs,

        /// Order the result list by fields (repeatable)
        #[arg(long, value_name = "field:dir", default_value = DEFAULT_ORDER)]
        order: Vec<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;

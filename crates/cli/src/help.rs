// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use crate::query::FIELDS;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  wf job list                        List the 50 most recent jobs
  wf job list phase==running         List running jobs
  wf --host jobs.internal:7777 ...   Talk to a specific job service",
    )
}

/// Plain (uncolored) reference for `job list` filter and order expressions.
pub fn job_list_reference() -> String {
    let mut text = String::from(
        "\
Examples:
  wf job list phase==running               finds all running jobs
  wf job list repo.repo|=werft             finds all jobs on repositories whose names begin with werft
  wf job list phase==done success==true    finds all successfully finished jobs
  wf job list --order created:asc -n 10    the ten oldest jobs

Filter expressions:
  Syntax: <key><op><value>
",
    );

    text.push_str("\nAvailable keys:\n");
    let key_width = FIELDS.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 4;
    for (key, desc) in FIELDS {
        text.push_str(&format!("  {key:<key_width$}{desc}\n"));
    }

    text.push_str(
        "
Available operators:
  ==    checks for equality
  ~=    value must be contained in
  |=    starts with
  =|    ends with

Order expressions (--order):
  Syntax: <field>:asc or <field>:desc",
    );
    text
}

/// Colorized after-help for `job list`.
pub fn job_list() -> String {
    colors::examples(&job_list_reference())
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;

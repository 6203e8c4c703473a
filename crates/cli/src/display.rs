// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tabled::settings::{Padding, Style};
use tabled::{Table, Tabled};
use wf_core::Job;

/// One line of the job table.
#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "OWNER")]
    owner: String,
    #[tabled(rename = "REPO")]
    repo: String,
    #[tabled(rename = "PHASE")]
    phase: String,
    #[tabled(rename = "SUCCESS")]
    success: bool,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        JobRow {
            name: job.name.clone(),
            owner: job.metadata.owner.clone(),
            repo: job.metadata.repository.full_name(),
            phase: job.phase.to_string(),
            success: job.conditions.success,
        }
    }
}

/// Format jobs as an aligned table with a header line.
///
/// Rows appear in the order given. Columns are separated by two spaces and
/// lines carry no trailing whitespace.
///
/// ```text
/// NAME             OWNER  REPO          PHASE    SUCCESS
/// widgets-build.3  alice  acme/widgets  running  false
/// ```
pub fn format_job_table(jobs: &[Job]) -> String {
    let mut table = Table::new(jobs.iter().map(JobRow::from));
    table.with(Style::empty()).with(Padding::new(0, 2, 0, 0));

    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

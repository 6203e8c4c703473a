// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use wf_core::ListJobsRequest;

use crate::cli::{OutputFormat, PageArgs};
use crate::client::JobService;
use crate::display::format_job_table;
use crate::error::Result;
use crate::query::{parse_filters, parse_orders};

use super::ServiceTarget;

/// List jobs matching the given filter expressions.
///
/// Expressions are validated before the service is contacted.
pub fn list(
    target: &ServiceTarget,
    filter: &[String],
    order: &[String],
    page: &PageArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = build_request(filter, order, page)?;
    let mut client = target.connect()?;
    run_impl(&mut client, request, format, &mut std::io::stdout().lock())
}

/// Parse expressions and paging into a request.
pub(crate) fn build_request(
    filter: &[String],
    order: &[String],
    page: &PageArgs,
) -> Result<ListJobsRequest> {
    let filter = parse_filters(filter)?;
    let order = parse_orders(order)?;
    Ok(ListJobsRequest::new(filter, order, page.limit, page.offset)?)
}

/// Internal implementation that accepts the service and writer for testing.
pub(crate) fn run_impl<S: JobService, W: Write>(
    service: &mut S,
    request: ListJobsRequest,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let response = service.list_jobs(request)?;
    tracing::debug!(
        total = response.total,
        returned = response.result.len(),
        "received jobs"
    );

    match format {
        OutputFormat::Text => writeln!(out, "{}", format_job_table(&response.result))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;

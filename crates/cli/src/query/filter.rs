// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter expressions.
//!
//! Parses expressions like `phase==running` or `repo.repo|=werft` into
//! [`FilterTerm`] values ready to send to the service.

use wf_core::{FilterExpression, FilterOp, FilterTerm, JobPhase};

use crate::error::{Error, Result};

/// Filter keys the service understands, with a short description each.
pub const FIELDS: [(&str, &str); 10] = [
    ("name", "name of the job"),
    ("trigger", "one of push, manual, unknown"),
    ("owner", "owner/originator of the job"),
    ("phase", "one of unknown, preparing, starting, running, done"),
    ("repo.owner", "owner of the source repository"),
    ("repo.repo", "name of the source repository"),
    ("repo.host", "host of the source repository (e.g. github.com)"),
    ("repo.ref", "source reference, i.e. branch name"),
    ("success", "one of true, false"),
    ("created", "time the job started as RFC3339 date"),
];

const SUCCESS_FIELD: &str = "success";
const PHASE_FIELD: &str = "phase";

/// Parse a batch of filter expressions, one [`FilterExpression`] per input.
///
/// Output order matches input order. The first invalid expression fails the
/// whole batch.
pub fn parse_filters<S: AsRef<str>>(exprs: &[S]) -> Result<Vec<FilterExpression>> {
    exprs
        .iter()
        .map(|expr| parse_filter(expr.as_ref()).map(FilterExpression::single))
        .collect()
}

/// Parse a single filter expression.
///
/// # Examples
///
/// ```ignore
/// let term = parse_filter("phase==running")?;
/// let term = parse_filter("repo.repo|=werft")?;
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingOperator`] if no operator marker is present,
/// [`Error::MalformedFilter`] if the field or value is empty, and
/// [`Error::InvalidPhase`] for an unknown `phase` value.
pub fn parse_filter(expr: &str) -> Result<FilterTerm> {
    let operation = detect_operator(expr).ok_or_else(|| Error::MissingOperator {
        expr: expr.to_string(),
        valid: FilterOp::valid_markers(),
    })?;

    let marker = operation.marker();
    let (field, raw_value) = expr
        .split_once(marker)
        .filter(|(field, value)| !field.is_empty() && !value.is_empty())
        .ok_or_else(|| Error::MalformedFilter {
            expr: expr.to_string(),
            marker,
        })?;

    let value = normalize_value(field, raw_value)?;
    tracing::debug!(field, %operation, value = %value, "parsed filter term");

    Ok(FilterTerm {
        field: field.to_string(),
        value,
        operation,
    })
}

/// Find the operator whose marker occurs first in the expression.
///
/// Markers never start at the same position (`==` and `=|` differ in their
/// second byte), so the leftmost match is unique.
fn detect_operator(expr: &str) -> Option<FilterOp> {
    FilterOp::ALL
        .into_iter()
        .filter_map(|op| expr.find(op.marker()).map(|pos| (pos, op)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, op)| op)
}

/// Apply field-specific value rewriting.
///
/// A `phase` value reaches the service as the canonical lowercase phase name
/// (`RUNNING` is sent as `running`), not as typed.
fn normalize_value(field: &str, raw: &str) -> Result<String> {
    match field {
        SUCCESS_FIELD => Ok(normalize_success(raw).to_string()),
        PHASE_FIELD => {
            let phase: JobPhase = raw.parse()?;
            Ok(phase.as_str().to_string())
        }
        _ => Ok(raw.to_string()),
    }
}

/// The service stores success as a 0/1 flag. Only `true` maps to `1`.
fn normalize_success(raw: &str) -> &'static str {
    match raw {
        "true" => "1",
        "false" => "0",
        other => {
            tracing::warn!(value = other, "success filter expects true or false, treating as false");
            "0"
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

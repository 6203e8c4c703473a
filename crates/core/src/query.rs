// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured list-jobs queries.
//!
//! These are the typed terms the CLI builds from user expressions and sends
//! to the service. They carry no parsing logic of their own.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::job::Job;

/// Comparison requested by a filter term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "OP_EQUALS")]
    Equals,
    #[serde(rename = "OP_CONTAINS")]
    Contains,
    #[serde(rename = "OP_STARTS_WITH")]
    StartsWith,
    #[serde(rename = "OP_ENDS_WITH")]
    EndsWith,
}

impl FilterOp {
    pub const ALL: [FilterOp; 4] = [
        FilterOp::Equals,
        FilterOp::Contains,
        FilterOp::StartsWith,
        FilterOp::EndsWith,
    ];

    /// Returns the two-character marker that selects this operator.
    pub fn marker(&self) -> &'static str {
        match self {
            FilterOp::Equals => "==",
            FilterOp::Contains => "~=",
            FilterOp::StartsWith => "|=",
            FilterOp::EndsWith => "=|",
        }
    }

    /// Get all markers as a comma-separated string for error messages.
    pub fn valid_markers() -> String {
        Self::ALL
            .iter()
            .map(|op| op.marker())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// A single comparison against a job field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    pub field: String,
    pub value: String,
    pub operation: FilterOp,
}

/// A group of filter terms.
///
/// The CLI produces exactly one term per expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub terms: Vec<FilterTerm>,
}

impl FilterExpression {
    /// Wrap a single term.
    pub fn single(term: FilterTerm) -> Self {
        FilterExpression { terms: vec![term] }
    }
}

/// Sort directive for the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderExpression {
    pub field: String,
    pub ascending: bool,
}

/// Request for a page of jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobsRequest {
    #[serde(default)]
    pub filter: Vec<FilterExpression>,
    #[serde(default)]
    pub order: Vec<OrderExpression>,
    pub limit: i32,
    pub start: i32,
}

impl ListJobsRequest {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Assemble a request from already-validated terms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `limit` or `offset` do not fit the
    /// wire's signed 32-bit fields.
    pub fn new(
        filter: Vec<FilterExpression>,
        order: Vec<OrderExpression>,
        limit: u32,
        offset: u32,
    ) -> Result<Self> {
        Ok(ListJobsRequest {
            filter,
            order,
            limit: to_wire_int("limit", limit)?,
            start: to_wire_int("offset", offset)?,
        })
    }
}

fn to_wire_int(field: &'static str, value: u32) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::OutOfRange {
        field,
        value: u64::from(value),
        max: i32::MAX as u64,
    })
}

/// A page of jobs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListJobsResponse {
    /// Number of jobs matching the filter, across all pages.
    pub total: i32,
    #[serde(default)]
    pub result: Vec<Job>,
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;

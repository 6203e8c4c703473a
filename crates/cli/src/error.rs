// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the wfrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid expression: missing operator in \"{expr}\"\n  hint: valid operators are: {valid}")]
    MissingOperator { expr: String, valid: String },

    #[error("invalid expression: \"{expr}\" must have a field before and a value after '{marker}'")]
    MalformedFilter { expr: String, marker: &'static str },

    #[error("invalid phase: {0}\n  hint: valid phases are: unknown, preparing, starting, running, done")]
    InvalidPhase(String),

    #[error("invalid order expression: {0}\n  hint: use <field>:asc or <field>:desc")]
    InvalidOrderExpression(String),

    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("cannot reach job service at {host}: {reason}")]
    Connect { host: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for wfrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<wf_core::Error> for Error {
    fn from(e: wf_core::Error) -> Self {
        match e {
            wf_core::Error::InvalidPhase(s) => Error::InvalidPhase(s),
            wf_core::Error::OutOfRange { field, value, max } => {
                Error::OutOfRange { field, value, max }
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

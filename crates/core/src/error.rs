// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for wf-core operations.

use thiserror::Error;

/// All possible errors that can occur in wf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid phase: {0}\n  hint: valid phases are: unknown, preparing, starting, running, done")]
    InvalidPhase(String),

    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// A specialized Result type for wf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    missing_operator = {
        Error::MissingOperator { expr: "name".into(), valid: "==, ~=".into() },
        "invalid expression: missing operator"
    },
    malformed = {
        Error::MalformedFilter { expr: "==x".into(), marker: "==" },
        "must have a field before and a value after '=='"
    },
    invalid_phase = { Error::InvalidPhase("bogus".into()), "invalid phase: bogus" },
    invalid_order = {
        Error::InvalidOrderExpression("a:b:c".into()),
        "invalid order expression: a:b:c"
    },
    service = { Error::Service("backend unavailable".into()), "service error: backend unavailable" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(
        err.to_string().contains(expected),
        "{:?} should contain {:?}",
        err.to_string(),
        expected
    );
}

#[test]
fn error_connect_names_host() {
    let err = Error::Connect {
        host: "jobs.internal:7777".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("jobs.internal:7777"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn error_from_core_invalid_phase() {
    let err: Error = wf_core::Error::InvalidPhase("Bogus".into()).into();
    assert!(matches!(err, Error::InvalidPhase(ref s) if s == "Bogus"));
}

#[test]
fn error_from_core_out_of_range() {
    let err: Error = wf_core::Error::OutOfRange {
        field: "offset",
        value: 1 << 31,
        max: i32::MAX as u64,
    }
    .into();
    assert!(matches!(err, Error::OutOfRange { field: "offset", .. }));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

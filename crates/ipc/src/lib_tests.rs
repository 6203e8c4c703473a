// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for wire protocol types and framing.

#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use wf_core::{
    FilterExpression, FilterOp, FilterTerm, Job, JobConditions, JobMetadata, JobPhase, JobTrigger,
    OrderExpression, Repository,
};

use super::*;
use yare::parameterized;

fn sample_request() -> ListJobsRequest {
    ListJobsRequest {
        filter: vec![FilterExpression::single(FilterTerm {
            field: "phase".to_string(),
            value: "running".to_string(),
            operation: FilterOp::Equals,
        })],
        order: vec![OrderExpression {
            field: "name".to_string(),
            ascending: false,
        }],
        limit: 50,
        start: 0,
    }
}

fn sample_job() -> Job {
    Job {
        name: "widgets-build.1".to_string(),
        metadata: JobMetadata {
            owner: "alice".to_string(),
            repository: Repository {
                host: "github.com".to_string(),
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
                ref_name: "main".to_string(),
                revision: "abc123".to_string(),
            },
            trigger: JobTrigger::Push,
            created: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        },
        phase: JobPhase::Done,
        conditions: JobConditions {
            success: true,
            failure_count: 0,
        },
        details: None,
    }
}

#[test]
fn list_jobs_request_is_tagged() {
    let json = serde_json::to_value(ServiceRequest::ListJobs(sample_request())).unwrap();
    assert_eq!(json["type"], "ListJobs");
    assert_eq!(json["limit"], 50);
    assert_eq!(json["filter"][0]["terms"][0]["field"], "phase");
}

#[test]
fn error_response_from_service_json() {
    let json = r#"{"type":"Error","message":"unknown field: colour"}"#;
    let parsed: ServiceResponse = serde_json::from_str(json).unwrap();
    assert_eq!(
        parsed,
        ServiceResponse::Error {
            message: "unknown field: colour".to_string()
        }
    );
}

#[parameterized(
    hello = { ServiceRequest::Hello { version: "0.1.0".to_string() } },
    list_jobs = { ServiceRequest::ListJobs(sample_request()) },
)]
fn framing_roundtrip_request(request: ServiceRequest) {
    let mut buf = Vec::new();
    framing::write_message(&mut buf, &request).unwrap();

    let mut cursor = Cursor::new(buf);
    let decoded: ServiceRequest = framing::read_message(&mut cursor).unwrap();
    assert_eq!(request, decoded);
}

#[parameterized(
    hello = { ServiceResponse::Hello { version: "0.1.0".to_string() } },
    empty_page = { ServiceResponse::Jobs(ListJobsResponse::default()) },
    one_job = { ServiceResponse::Jobs(ListJobsResponse { total: 7, result: vec![sample_job()] }) },
    error = { ServiceResponse::Error { message: "test".to_string() } },
)]
fn framing_roundtrip_response(response: ServiceResponse) {
    let mut buf = Vec::new();
    framing::write_message(&mut buf, &response).unwrap();

    let mut cursor = Cursor::new(buf);
    let decoded: ServiceResponse = framing::read_message(&mut cursor).unwrap();
    assert_eq!(response, decoded);
}

#[test]
fn framing_writes_big_endian_length_prefix() {
    let mut buf = Vec::new();
    framing::write_message(&mut buf, &"abc").unwrap();
    // "abc" serializes to 5 bytes including quotes
    assert_eq!(&buf[..4], &[0, 0, 0, 5]);
    assert_eq!(&buf[4..], b"\"abc\"");
}

#[test]
fn framing_rejects_oversized_message() {
    let len = (framing::MAX_MESSAGE_SIZE as u32) + 1;
    let mut cursor = Cursor::new(len.to_be_bytes().to_vec());
    let err = framing::read_message::<_, ServiceResponse>(&mut cursor).unwrap_err();
    assert!(err.to_string().contains("message too large"));
}

#[test]
fn framing_reports_truncated_body() {
    let mut buf = Vec::new();
    framing::write_message(&mut buf, &ServiceRequest::ListJobs(sample_request())).unwrap();
    buf.truncate(buf.len() - 3);
    let mut cursor = Cursor::new(buf);
    let err = framing::read_message::<_, ServiceRequest>(&mut cursor).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[test]
fn framing_reports_invalid_json() {
    let body = b"not json";
    let mut buf = (body.len() as u32).to_be_bytes().to_vec();
    buf.extend_from_slice(body);
    let mut cursor = Cursor::new(buf);
    let err = framing::read_message::<_, ServiceRequest>(&mut cursor).unwrap_err();
    assert!(err.to_string().contains("deserialize error"));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{TimeZone, Utc};
use wf_core::{Job, JobConditions, JobMetadata, JobPhase, JobTrigger, Repository};
use wf_ipc::{framing, ListJobsRequest, ListJobsResponse, ServiceRequest, ServiceResponse};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `wf` with the environment scrubbed and the config pointed at an empty
/// temp directory, so the user's own settings never leak into a test.
pub fn wf(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wf");
    cmd.env_remove("WF_HOST")
        .env_remove("WF_CONFIG")
        .env_remove("WF_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(temp.path().join("config.toml"));
    cmd
}

/// An address with nothing listening on it.
pub const DEAD_HOST: &str = "127.0.0.1:1";

/// A one-shot job service: answers the handshake, then serves `page` for the
/// first list request. The handle yields the request the CLI sent.
pub fn serve_jobs(page: ListJobsResponse) -> (String, JoinHandle<ListJobsRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let hello: ServiceRequest = framing::read_message(&mut stream).unwrap();
        assert!(matches!(hello, ServiceRequest::Hello { .. }));
        framing::write_message(
            &mut stream,
            &ServiceResponse::Hello {
                version: "test".to_string(),
            },
        )
        .unwrap();

        let request: ServiceRequest = framing::read_message(&mut stream).unwrap();
        let ServiceRequest::ListJobs(request) = request else {
            panic!("expected ListJobs, got {request:?}");
        };
        framing::write_message(&mut stream, &ServiceResponse::Jobs(page)).unwrap();
        request
    });
    (addr, handle)
}

/// A one-shot job service that rejects the list request.
pub fn serve_error(message: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let message = message.to_string();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let _: ServiceRequest = framing::read_message(&mut stream).unwrap();
        framing::write_message(
            &mut stream,
            &ServiceResponse::Hello {
                version: "test".to_string(),
            },
        )
        .unwrap();
        let _: ServiceRequest = framing::read_message(&mut stream).unwrap();
        framing::write_message(&mut stream, &ServiceResponse::Error { message }).unwrap();
    });
    addr
}

pub fn job(name: &str, owner: &str, repo: &str, phase: JobPhase, success: bool) -> Job {
    Job {
        name: name.to_string(),
        metadata: JobMetadata {
            owner: owner.to_string(),
            repository: Repository {
                host: "github.com".to_string(),
                owner: "acme".to_string(),
                repo: repo.to_string(),
                ref_name: "main".to_string(),
                revision: String::new(),
            },
            trigger: JobTrigger::Push,
            created: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
        },
        phase,
        conditions: JobConditions {
            success,
            failure_count: 0,
        },
        details: None,
    }
}

pub fn page(jobs: Vec<Job>) -> ListJobsResponse {
    ListJobsResponse {
        total: jobs.len() as i32,
        result: jobs,
    }
}

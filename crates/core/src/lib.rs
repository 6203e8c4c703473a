// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wf-core: Shared library for the wf job client
//!
//! This crate provides the job records returned by the orchestration service
//! and the structured filter/order terms sent to it when listing jobs.

pub mod error;
pub mod job;
pub mod query;

pub use error::{Error, Result};
pub use job::{Job, JobConditions, JobMetadata, JobPhase, JobTrigger, Repository};
pub use query::{
    FilterExpression, FilterOp, FilterTerm, ListJobsRequest, ListJobsResponse, OrderExpression,
};

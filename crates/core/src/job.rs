// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Job records as reported by the orchestration service.
//!
//! Enumerations carry two spellings: the wire name used by the service
//! (`PHASE_RUNNING`, `TRIGGER_PUSH`) and the short lowercase name used on the
//! command line and in table output (`running`, `push`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobPhase {
    #[serde(rename = "PHASE_UNKNOWN")]
    Unknown,
    /// Workspace and resources are being set up.
    #[serde(rename = "PHASE_PREPARING")]
    Preparing,
    /// The job's pod has been scheduled and is starting.
    #[serde(rename = "PHASE_STARTING")]
    Starting,
    #[serde(rename = "PHASE_RUNNING")]
    Running,
    /// Finished, successfully or not. See [`JobConditions::success`].
    #[serde(rename = "PHASE_DONE")]
    Done,
}

impl JobPhase {
    /// All phases in lifecycle order.
    pub const ALL: [JobPhase; 5] = [
        JobPhase::Unknown,
        JobPhase::Preparing,
        JobPhase::Starting,
        JobPhase::Running,
        JobPhase::Done,
    ];

    /// Returns the short name used on the command line and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobPhase::Unknown => "unknown",
            JobPhase::Preparing => "preparing",
            JobPhase::Starting => "starting",
            JobPhase::Running => "running",
            JobPhase::Done => "done",
        }
    }

    /// Returns the name the service uses for this phase.
    pub fn wire_name(&self) -> &'static str {
        match self {
            JobPhase::Unknown => "PHASE_UNKNOWN",
            JobPhase::Preparing => "PHASE_PREPARING",
            JobPhase::Starting => "PHASE_STARTING",
            JobPhase::Running => "PHASE_RUNNING",
            JobPhase::Done => "PHASE_DONE",
        }
    }

    /// Look up a phase by its exact wire name.
    pub fn from_wire_name(name: &str) -> Option<JobPhase> {
        Self::ALL.into_iter().find(|p| p.wire_name() == name)
    }
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobPhase {
    type Err = Error;

    /// Parses a short phase name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        JobPhase::from_wire_name(&format!("PHASE_{}", s.to_uppercase()))
            .ok_or_else(|| Error::InvalidPhase(s.to_string()))
    }
}

/// What caused a job to be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobTrigger {
    #[serde(rename = "TRIGGER_UNKNOWN")]
    Unknown,
    /// A push to the source repository.
    #[serde(rename = "TRIGGER_PUSH")]
    Push,
    /// Started explicitly by a user.
    #[serde(rename = "TRIGGER_MANUAL")]
    Manual,
}

impl JobTrigger {
    /// Returns the short name used on the command line and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobTrigger::Unknown => "unknown",
            JobTrigger::Push => "push",
            JobTrigger::Manual => "manual",
        }
    }
}

impl fmt::Display for JobTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source repository a job was started from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Repository {
    /// Host of the repository, e.g. `github.com`.
    pub host: String,
    pub owner: String,
    pub repo: String,
    /// Source reference, usually a branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,
}

impl Repository {
    /// Returns `owner/repo`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Who started a job, from where, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
    /// Owner/originator of the job.
    pub owner: String,
    pub repository: Repository,
    pub trigger: JobTrigger,
    /// When the job was created.
    pub created: DateTime<Utc>,
}

/// Outcome flags of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobConditions {
    pub success: bool,
    #[serde(default)]
    pub failure_count: u32,
}

/// A single job as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub metadata: JobMetadata,
    pub phase: JobPhase,
    #[serde(default)]
    pub conditions: JobConditions,
    /// Free-form status detail, e.g. a failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod job;

use std::time::Duration;

use crate::client::ServiceClient;
use crate::config::Config;
use crate::env;
use crate::error::Result;

/// Where and how to reach the job service for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    pub host: String,
    pub timeout: Duration,
}

impl ServiceTarget {
    /// Resolve the target from the loaded config, the `--host` flag and
    /// `WF_HOST`.
    pub fn resolve(config: &Config, host_flag: Option<&str>) -> Self {
        ServiceTarget {
            host: config.resolve_host(host_flag, env::host()),
            timeout: config.timeout(),
        }
    }

    /// Open a connection to the service.
    pub fn connect(&self) -> Result<ServiceClient> {
        tracing::debug!(host = %self.host, "dialing job service");
        ServiceClient::connect(&self.host, self.timeout)
    }
}

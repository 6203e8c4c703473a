// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;
use wf_core::ListJobsRequest;

/// Paging arguments for list commands.
#[derive(Args, Clone, Debug)]
pub struct PageArgs {
    /// Limit the number of results
    #[arg(short = 'n', long, default_value_t = ListJobsRequest::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Return results starting later than zero
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

impl Default for PageArgs {
    fn default() -> Self {
        PageArgs {
            limit: ListJobsRequest::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::WF_HOST, "WF_HOST");
    assert_eq!(vars::WF_CONFIG, "WF_CONFIG");
    assert_eq!(vars::WF_LOG, "WF_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_host_set_and_empty() {
    std::env::set_var("WF_HOST", "jobs.internal:7777");
    assert_eq!(host().as_deref(), Some("jobs.internal:7777"));
    std::env::set_var("WF_HOST", "");
    assert_eq!(host(), None);
    std::env::remove_var("WF_HOST");
    assert_eq!(host(), None);
}

#[test]
fn test_config_path() {
    std::env::set_var("WF_CONFIG", "/tmp/wf.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/wf.toml")));
    std::env::remove_var("WF_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn test_log_filter() {
    std::env::set_var("WF_LOG", "wfrs=trace");
    assert_eq!(log_filter().as_deref(), Some("wfrs=trace"));
    std::env::remove_var("WF_LOG");
    assert_eq!(log_filter(), None);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration is read from a TOML file and includes:
//! - `host`: address of the job service (`hostname:port`)
//! - `timeout_secs`: connect/read/write timeout for service calls
//!
//! The file is looked up at `--config`, then `$WF_CONFIG`, then
//! `<config dir>/wf/config.toml`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

/// Service address used when nothing else is configured.
pub const DEFAULT_HOST: &str = "localhost:7777";

const CONFIG_DIR_NAME: &str = "wf";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address of the job service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Timeout in seconds for connecting and for each request (default: 5).
    /// Must be positive.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(Error::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        if config.timeout_secs == 0 {
            return Err(Error::Config(format!(
                "{}: timeout_secs must be greater than 0",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Locates and loads the configuration file.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match locate(explicit) {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Picks the service address: command-line flag, then `WF_HOST`, then the
    /// config file, then [`DEFAULT_HOST`].
    pub fn resolve_host(&self, flag: Option<&str>, env_host: Option<String>) -> String {
        flag.map(str::to_string)
            .or(env_host)
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// Timeout for service calls.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Returns the config file path to use, if any can be determined.
fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(env::config_path)
        .or_else(default_path)
}

/// Returns `<config dir>/wf/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

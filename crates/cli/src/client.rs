// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the remote job service.
//!
//! Opens a TCP connection to the service, performs a version handshake, and
//! exchanges framed JSON requests. The connection closes when the client is
//! dropped.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use wf_core::{ListJobsRequest, ListJobsResponse};
use wf_ipc::{framing, ServiceRequest, ServiceResponse};

use crate::error::{Error, Result};

/// Operations the CLI needs from the job service.
pub trait JobService {
    /// List one page of jobs.
    fn list_jobs(&mut self, request: ListJobsRequest) -> Result<ListJobsResponse>;
}

/// A client connection to the job service.
pub struct ServiceClient {
    stream: TcpStream,
    server_version: String,
}

impl ServiceClient {
    /// Connect to the service at `host` (`hostname:port`).
    pub fn connect(host: &str, timeout: Duration) -> Result<Self> {
        let connect_err = |reason: String| Error::Connect {
            host: host.to_string(),
            reason,
        };

        let addrs = host
            .to_socket_addrs()
            .map_err(|e| connect_err(e.to_string()))?;

        let mut last_err = None;
        let mut connected = None;
        for addr in addrs {
            tracing::debug!(%addr, "connecting to job service");
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    connected = Some(stream);
                    break;
                }
                Err(e) => last_err = Some(e),
            }
        }
        let stream = connected.ok_or_else(|| {
            connect_err(
                last_err
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no addresses resolved".to_string()),
            )
        })?;

        stream
            .set_read_timeout(Some(timeout))
            .map_err(|e| Error::Transport(format!("failed to set read timeout: {}", e)))?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(|e| Error::Transport(format!("failed to set write timeout: {}", e)))?;

        let mut client = ServiceClient {
            stream,
            server_version: String::new(),
        };
        client.hello()?;
        Ok(client)
    }

    /// Version reported by the service during the handshake.
    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    /// Send a request and receive a response.
    fn request(&mut self, request: &ServiceRequest) -> Result<ServiceResponse> {
        framing::write_message(&mut self.stream, request)
            .map_err(|e| Error::Transport(format!("failed to send request: {}", e)))?;
        framing::read_message(&mut self.stream)
            .map_err(|e| Error::Transport(format!("failed to read response: {}", e)))
    }

    fn hello(&mut self) -> Result<()> {
        let request = ServiceRequest::Hello {
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        match self.request(&request)? {
            ServiceResponse::Hello { version } => {
                tracing::debug!(server_version = %version, "job service handshake complete");
                self.server_version = version;
                Ok(())
            }
            ServiceResponse::Error { message } => Err(Error::Service(message)),
            other => Err(Error::Transport(format!("unexpected response: {:?}", other))),
        }
    }
}

impl JobService for ServiceClient {
    fn list_jobs(&mut self, request: ListJobsRequest) -> Result<ListJobsResponse> {
        match self.request(&ServiceRequest::ListJobs(request))? {
            ServiceResponse::Jobs(response) => Ok(response),
            ServiceResponse::Error { message } => Err(Error::Service(message)),
            other => Err(Error::Transport(format!("unexpected response: {:?}", other))),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

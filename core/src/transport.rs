//! Executing HTTP transport.
//!
//! # Design
//! Resource clients build requests as plain data; a `Transport` performs the
//! round-trip. `UreqTransport` is the production implementation: one ureq
//! agent with the configured global timeout and status-as-error disabled, so
//! non-2xx responses come back as data and status interpretation stays in
//! the parse methods. No retries, no response caching.
//!
//! Every call takes a `CancelToken`. The token is checked before dispatch
//! and again after the round-trip, so a request that outlives its screen is
//! discarded instead of applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::Config;

/// Cooperative cancellation flag, one per screen lifetime.
///
/// Clones share the flag, so a screen can hand copies to in-flight fetches
/// and cancel them all on unmount.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Executes an `HttpRequest` and returns the raw `HttpResponse`.
///
/// Implementations must not interpret status codes; that belongs to the
/// resource clients' `parse_*` methods.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest, cancel: &CancelToken) -> Result<HttpResponse, ApiError>;
}

/// Production transport backed by a ureq agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest, cancel: &CancelToken) -> Result<HttpResponse, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&request.path);
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Delete, _) => {
                let mut builder = self.agent.delete(&request.path);
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&request.path);
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&request.path);
                for (key, value) in &request.query {
                    builder = builder.query(key.as_str(), value.as_str());
                }
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = match result {
            Ok(response) => response,
            Err(ureq::Error::Timeout(_)) => return Err(ApiError::Timeout),
            Err(err) => return Err(ApiError::Network(err.to_string())),
        };

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        // The screen may have been dismissed while the request was in
        // flight; discard the result rather than hand back stale data.
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        Ok(HttpResponse { status, body })
    }
}

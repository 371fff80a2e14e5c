//! Client configuration.
//!
//! # Design
//! One explicit value instead of hard-coded connection constants: callers
//! construct a `Config` and hand it to [`crate::Api::new`]. The timeout is a
//! single global bound applied to the whole round-trip.

use std::time::Duration;

/// Applies to every request unless overridden with [`Config::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// A trailing slash on `base_url` is stripped so request paths can be
    /// joined with a plain `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

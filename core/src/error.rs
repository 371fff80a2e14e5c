//! Error types for the storefront API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." Other non-2xx responses land in `Http` with the status code and
//! the server's `detail` message when it sent one. `Validation` is raised by
//! the client-side required-field pre-check before any request is issued.

use std::fmt;

/// Errors returned by the resource clients and the transport.
#[derive(Debug)]
pub enum ApiError {
    /// The backend could not be reached or the connection failed mid-flight.
    Network(String),

    /// The configured request bound elapsed before a response arrived.
    Timeout,

    /// The request was cancelled because its screen was dismissed.
    Cancelled,

    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, message: String },

    /// A required field was missing or out of range; no request was issued.
    Validation(String),

    /// Reading or writing the persisted admin token failed.
    Storage(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::Cancelled => write!(f, "request cancelled"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Validation(msg) => write!(f, "validation failed: {msg}"),
            ApiError::Storage(msg) => write!(f, "token storage failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

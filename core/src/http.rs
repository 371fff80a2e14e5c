//! HTTP transport types.
//!
//! # Design
//! Requests and responses are plain data. Resource clients build
//! `HttpRequest` values without touching the network; a `Transport` executes
//! them and hands back an `HttpResponse` for the matching `parse_*` method.
//! Query parameters are carried unencoded as pairs and percent-encoded by
//! the transport, so builders stay trivially testable.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the resource clients' `build_*` methods and executed by a
/// [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL without the query string.
    pub path: String,
    /// Query parameters, unencoded.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

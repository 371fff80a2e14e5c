//! Resource client modules, one per backend resource family.
//!
//! # Design
//! Each client is stateless — it holds only `base_url` — and splits every
//! operation into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The transport performs
//! the round-trip in between, keeping the clients deterministic and free of
//! I/O. Builders for create operations run the payload's required-field
//! pre-check, so an invalid form never produces a request at all.

pub mod admin;
pub mod bookings;
pub mod gallery;
pub mod products;
pub mod reviews;
pub mod seed;
pub mod services;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::HttpResponse;

pub(crate) fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|err| ApiError::Serialization(err.to_string()))
}

/// Accept any 2xx; map 404 to `NotFound` and everything else to `Http` with
/// the server's `detail` message when the body carries one.
pub(crate) fn ensure_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        message: error_detail(&response.body),
    })
}

/// Pull the human-readable message out of a FastAPI-style error body
/// (`{"detail": "..."}`), falling back to the raw body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

pub(crate) fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    ensure_success(&response)?;
    serde_json::from_str(&response.body).map_err(|err| ApiError::Deserialization(err.to_string()))
}

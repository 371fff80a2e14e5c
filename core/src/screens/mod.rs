//! Screen view-models.
//!
//! # Design
//! Plain state structs, no rendering. Every screen follows the same rhythm:
//! `load` on first mount (clears `loading` when done), `refresh` re-runs the
//! same fetch under a separate `refreshing` flag so callers can distinguish
//! initial load from pull-to-refresh, and `unmount` cancels the screen's
//! token so in-flight requests are discarded. Read failures are logged and
//! degrade to empty state; only form submissions return errors to the
//! caller.

pub mod admin;
pub mod booking;
pub mod gallery;
pub mod home;
pub mod product_detail;
pub mod products;
pub mod reviews;
pub mod services;

use std::thread;

use crate::error::ApiError;

/// Collapse a fanned-out fetch to its items, degrading to empty on failure.
pub(crate) fn items_or_empty<T>(result: thread::Result<Result<Vec<T>, ApiError>>, what: &str) -> Vec<T> {
    match result {
        Ok(Ok(items)) => items,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "failed to load {what}");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!("{what} fetch panicked");
            Vec::new()
        }
    }
}

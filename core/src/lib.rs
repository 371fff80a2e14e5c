//! API client core for the storefront-and-booking backend.
//!
//! # Overview
//! Everything a storefront app needs to talk to its backend: typed wire
//! schemas, per-resource clients, an executing HTTP transport with a bounded
//! wait and cooperative cancellation, the persisted admin session, and the
//! screen view-models that orchestrate fetch-on-mount, pull-to-refresh, and
//! client-side filtering.
//!
//! # Design
//! - Resource clients are stateless and split every operation into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`),
//!   so the I/O boundary is explicit and the clients stay deterministic.
//! - [`Api`] wires the clients to a [`Transport`] and is the surface screens
//!   call; `Api::scoped` ties requests to a screen's [`CancelToken`].
//! - Create builders run the payload's required-field pre-check, so invalid
//!   forms never produce a request. The backend remains the source of truth
//!   for validation.
//! - Read failures degrade to empty state and are logged; write failures
//!   propagate so the caller can surface a dialog.

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod screens;
pub mod session;
pub mod transport;
pub mod types;

pub use api::Api;
pub use clients::products::ProductFilter;
pub use config::Config;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{AdminSession, FileTokenStore, MemoryTokenStore, TokenStore};
pub use transport::{CancelToken, Transport, UreqTransport};
pub use types::{
    Booking, BookingStatus, Category, GalleryItem, LoginRequest, LoginResponse, Message,
    NewBooking, NewGalleryItem, NewProduct, NewReview, NewService, Product, Review, Service,
};

//! Executed API facade.
//!
//! # Design
//! `Api` wires the deterministic resource clients to a shared `Transport`
//! and exposes one executed method per backend operation: build the request,
//! run it, parse the response. Screens do not touch the transport directly;
//! they call these methods through a handle scoped to their own
//! `CancelToken`, so requests die with the screen that started them.

use std::sync::Arc;

use crate::clients::admin::AdminClient;
use crate::clients::bookings::BookingsClient;
use crate::clients::gallery::GalleryClient;
use crate::clients::products::{ProductFilter, ProductsClient};
use crate::clients::reviews::ReviewsClient;
use crate::clients::seed::SeedClient;
use crate::clients::services::ServicesClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::transport::{CancelToken, Transport, UreqTransport};
use crate::types::{
    Booking, BookingStatus, GalleryItem, LoginRequest, LoginResponse, Message, NewBooking,
    NewGalleryItem, NewProduct, NewReview, NewService, Product, Review, Service,
};

#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    cancel: CancelToken,
    products: ProductsClient,
    bookings: BookingsClient,
    reviews: ReviewsClient,
    services: ServicesClient,
    gallery: GalleryClient,
    admin: AdminClient,
    seed: SeedClient,
}

impl Api {
    pub fn new(config: Config) -> Self {
        let transport = Arc::new(UreqTransport::new(&config));
        Self::with_transport(&config.base_url, transport)
    }

    /// Build against an arbitrary transport; tests inject fakes here.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cancel: CancelToken::new(),
            products: ProductsClient::new(base_url),
            bookings: BookingsClient::new(base_url),
            reviews: ReviewsClient::new(base_url),
            services: ServicesClient::new(base_url),
            gallery: GalleryClient::new(base_url),
            admin: AdminClient::new(base_url),
            seed: SeedClient::new(base_url),
        }
    }

    /// Derive a handle whose requests are tied to `cancel`. Screens call
    /// this on mount with their lifetime token.
    pub fn scoped(&self, cancel: CancelToken) -> Self {
        let mut api = self.clone();
        api.cancel = cancel;
        api
    }

    // --- products ---

    pub fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let req = self.products.build_list(filter);
        self.products.parse_list(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let req = self.products.build_get(id);
        self.products.parse_get(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn create_product(&self, input: &NewProduct) -> Result<Product, ApiError> {
        let req = self.products.build_create(input)?;
        self.products.parse_create(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn update_product(&self, id: &str, input: &NewProduct) -> Result<Product, ApiError> {
        let req = self.products.build_update(id, input)?;
        self.products.parse_update(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let req = self.products.build_delete(id);
        self.products.parse_delete(self.transport.execute(&req, &self.cancel)?)
    }

    // --- bookings ---

    pub fn list_bookings(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, ApiError> {
        let req = self.bookings.build_list(status);
        self.bookings.parse_list(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn create_booking(&self, input: &NewBooking) -> Result<Booking, ApiError> {
        let req = self.bookings.build_create(input)?;
        self.bookings.parse_create(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn update_booking_status(&self, id: &str, status: BookingStatus) -> Result<Booking, ApiError> {
        let req = self.bookings.build_update_status(id, status)?;
        self.bookings.parse_update_status(self.transport.execute(&req, &self.cancel)?)
    }

    // --- reviews ---

    pub fn list_reviews(&self, approved: Option<bool>) -> Result<Vec<Review>, ApiError> {
        let req = self.reviews.build_list(approved);
        self.reviews.parse_list(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn create_review(&self, input: &NewReview) -> Result<Review, ApiError> {
        let req = self.reviews.build_create(input)?;
        self.reviews.parse_create(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn set_review_approved(&self, id: &str, approved: bool) -> Result<Review, ApiError> {
        let req = self.reviews.build_set_approved(id, approved)?;
        self.reviews.parse_set_approved(self.transport.execute(&req, &self.cancel)?)
    }

    // --- services ---

    pub fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let req = self.services.build_list();
        self.services.parse_list(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn create_service(&self, input: &NewService) -> Result<Service, ApiError> {
        let req = self.services.build_create(input)?;
        self.services.parse_create(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn update_service(&self, id: &str, input: &NewService) -> Result<Service, ApiError> {
        let req = self.services.build_update(id, input)?;
        self.services.parse_update(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        let req = self.services.build_delete(id);
        self.services.parse_delete(self.transport.execute(&req, &self.cancel)?)
    }

    // --- gallery ---

    pub fn list_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        let req = self.gallery.build_list();
        self.gallery.parse_list(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn add_gallery_item(&self, input: &NewGalleryItem) -> Result<GalleryItem, ApiError> {
        let req = self.gallery.build_create(input)?;
        self.gallery.parse_create(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn delete_gallery_item(&self, id: &str) -> Result<(), ApiError> {
        let req = self.gallery.build_delete(id);
        self.gallery.parse_delete(self.transport.execute(&req, &self.cancel)?)
    }

    // --- admin / seed ---

    pub fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let req = self.admin.build_login(input)?;
        self.admin.parse_login(self.transport.execute(&req, &self.cancel)?)
    }

    pub fn seed_demo_data(&self) -> Result<Message, ApiError> {
        let req = self.seed.build_seed();
        self.seed.parse_seed(self.transport.execute(&req, &self.cancel)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::FakeTransport;

    fn api(transport: FakeTransport) -> (Api, Arc<FakeTransport>) {
        let transport = Arc::new(transport);
        let api = Api::with_transport("http://test", transport.clone());
        (api, transport)
    }

    #[test]
    fn invalid_booking_never_reaches_the_transport() {
        let (api, transport) = api(FakeTransport::new());
        let input = NewBooking {
            name: "Asha".to_string(),
            ..NewBooking::default()
        };
        let err = api.create_booking(&input).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn invalid_review_never_reaches_the_transport() {
        let (api, transport) = api(FakeTransport::new());
        let input = NewReview {
            name: String::new(),
            rating: 4,
            comment: "Great".to_string(),
        };
        assert!(api.create_review(&input).is_err());
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn list_products_executes_and_parses() {
        let (api, transport) = api(FakeTransport::new().route("/api/products", 200, "[]"));
        let products = api.list_products(&ProductFilter::default()).unwrap();
        assert!(products.is_empty());
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn scoped_handle_honors_its_token() {
        let (api, transport) = api(FakeTransport::new().route("/api/products", 200, "[]"));
        let cancel = CancelToken::new();
        let scoped = api.scoped(cancel.clone());
        cancel.cancel();
        let err = scoped.list_products(&ProductFilter::default()).unwrap_err();
        assert!(matches!(err, ApiError::Cancelled));
        assert_eq!(transport.request_count(), 0);
        // The original handle still works.
        assert!(api.list_products(&ProductFilter::default()).is_ok());
    }
}

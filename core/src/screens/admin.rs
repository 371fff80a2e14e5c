//! Admin screens: login and dashboard.
//!
//! Mounting an admin screen checks the stored token and redirects to login
//! when it is absent. This is advisory routing only; the backend must
//! authorize every admin-mutating request on its own.

use std::thread;

use crate::api::Api;
use crate::clients::products::ProductFilter;
use crate::error::ApiError;
use crate::screens::items_or_empty;
use crate::session::{AdminSession, TokenStore};
use crate::transport::CancelToken;
use crate::types::{Booking, BookingStatus, GalleryItem, NewGalleryItem, NewProduct, Product, Review};

/// Outcome of an admin screen's mount-time auth check.
#[derive(Debug, PartialEq, Eq)]
pub enum Mount {
    Ready,
    RedirectToLogin,
}

pub struct LoginScreen {
    pub submitting: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self { submitting: false }
    }

    /// Attempt a login; on failure returns the message to show in the alert
    /// dialog, preferring the server's detail over the generic fallback.
    pub fn submit<S: TokenStore>(
        &mut self,
        api: &Api,
        session: &AdminSession<S>,
        username: &str,
        password: &str,
    ) -> Result<(), String> {
        self.submitting = true;
        let result = session.login(api, username, password);
        self.submitting = false;
        match result {
            Ok(()) => Ok(()),
            Err(ApiError::Validation(message)) => Err(message),
            Err(ApiError::Http { message, .. }) if !message.is_empty() => Err(message),
            Err(_) => Err("Invalid credentials".to_string()),
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts shown on the dashboard cards.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub products: usize,
    pub bookings: usize,
    pub pending_bookings: usize,
    pub reviews: usize,
    pub pending_reviews: usize,
}

pub struct DashboardScreen {
    pub stats: DashboardStats,
    pub loading: bool,
    cancel: CancelToken,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            stats: DashboardStats::default(),
            loading: true,
            cancel: CancelToken::new(),
        }
    }

    pub fn mount<S: TokenStore>(&self, session: &AdminSession<S>) -> Mount {
        if session.is_authenticated() {
            Mount::Ready
        } else {
            Mount::RedirectToLogin
        }
    }

    /// Fan out the three stat fetches; each arm degrades independently.
    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());

        let (products, bookings, reviews) = thread::scope(|s| {
            let products = s.spawn(|| api.list_products(&ProductFilter::default()));
            let bookings = s.spawn(|| api.list_bookings(None));
            let reviews = s.spawn(|| api.list_reviews(None));
            (products.join(), bookings.join(), reviews.join())
        });

        let products = items_or_empty(products, "products");
        let bookings = items_or_empty(bookings, "bookings");
        let reviews = items_or_empty(reviews, "reviews");

        self.stats = DashboardStats {
            products: products.len(),
            bookings: bookings.len(),
            pending_bookings: bookings
                .iter()
                .filter(|booking| booking.status == BookingStatus::Pending)
                .count(),
            reviews: reviews.len(),
            pending_reviews: reviews.iter().filter(|review| !review.approved).count(),
        };
        self.loading = false;
    }

    // Admin mutations, scoped to this screen's lifetime.

    pub fn set_booking_status(&self, api: &Api, id: &str, status: BookingStatus) -> Result<Booking, ApiError> {
        api.scoped(self.cancel.clone()).update_booking_status(id, status)
    }

    pub fn set_review_approved(&self, api: &Api, id: &str, approved: bool) -> Result<Review, ApiError> {
        api.scoped(self.cancel.clone()).set_review_approved(id, approved)
    }

    pub fn save_product(&self, api: &Api, id: Option<&str>, input: &NewProduct) -> Result<Product, ApiError> {
        let api = api.scoped(self.cancel.clone());
        match id {
            Some(id) => api.update_product(id, input),
            None => api.create_product(input),
        }
    }

    pub fn delete_product(&self, api: &Api, id: &str) -> Result<(), ApiError> {
        api.scoped(self.cancel.clone()).delete_product(id)
    }

    pub fn add_gallery_item(&self, api: &Api, input: &NewGalleryItem) -> Result<GalleryItem, ApiError> {
        api.scoped(self.cancel.clone()).add_gallery_item(input)
    }

    pub fn delete_gallery_item(&self, api: &Api, id: &str) -> Result<(), ApiError> {
        api.scoped(self.cancel.clone()).delete_gallery_item(id)
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::MemoryTokenStore;
    use crate::transport::testing::FakeTransport;

    fn api(transport: FakeTransport) -> Api {
        Api::with_transport("http://test", Arc::new(transport))
    }

    #[test]
    fn mount_redirects_without_a_token() {
        let session = AdminSession::new(MemoryTokenStore::new());
        let screen = DashboardScreen::new();
        assert_eq!(screen.mount(&session), Mount::RedirectToLogin);
    }

    #[test]
    fn mount_passes_after_a_successful_login() {
        let api = api(FakeTransport::new().route(
            "/api/admin/login",
            200,
            r#"{"success": true, "message": "Login successful", "token": "admin_token_admin"}"#,
        ));
        let session = AdminSession::new(MemoryTokenStore::new());
        let mut login = LoginScreen::new();
        login.submit(&api, &session, "admin", "admin123").unwrap();

        let screen = DashboardScreen::new();
        assert_eq!(screen.mount(&session), Mount::Ready);
    }

    #[test]
    fn login_failure_surfaces_the_server_detail() {
        let api = api(FakeTransport::new().route(
            "/api/admin/login",
            401,
            r#"{"detail":"Invalid credentials"}"#,
        ));
        let session = AdminSession::new(MemoryTokenStore::new());
        let mut login = LoginScreen::new();

        let message = login.submit(&api, &session, "admin", "wrong").unwrap_err();
        assert_eq!(message, "Invalid credentials");
        assert!(!login.submitting);
    }

    #[test]
    fn login_network_failure_falls_back_to_generic_message() {
        let api = api(FakeTransport::new());
        let session = AdminSession::new(MemoryTokenStore::new());
        let mut login = LoginScreen::new();

        let message = login.submit(&api, &session, "admin", "admin123").unwrap_err();
        assert_eq!(message, "Invalid credentials");
    }

    #[test]
    fn dashboard_manages_the_gallery() {
        let transport = FakeTransport::new()
            .route(
                "/api/gallery",
                200,
                r#"{"id": "g1", "image": "data:image/png;base64,AA==", "createdAt": "2024-01-01T00:00:00Z"}"#,
            )
            .route("/api/gallery/g1", 200, r#"{"message": "Gallery item deleted"}"#);
        let api = api(transport);
        let screen = DashboardScreen::new();

        let input = NewGalleryItem {
            image: "data:image/png;base64,AA==".to_string(),
            caption: None,
        };
        let item = screen.add_gallery_item(&api, &input).unwrap();
        assert_eq!(item.id, "g1");
        screen.delete_gallery_item(&api, "g1").unwrap();
    }

    #[test]
    fn dashboard_counts_pending_work() {
        let transport = FakeTransport::new()
            .route("/api/products", 200, "[]")
            .route(
                "/api/bookings",
                200,
                r#"[
                    {"id": "b1", "name": "A", "phone": "1", "service": "x", "date": "d", "time": "t", "status": "pending", "createdAt": "2024-01-01T00:00:00Z"},
                    {"id": "b2", "name": "B", "phone": "2", "service": "x", "date": "d", "time": "t", "status": "confirmed", "createdAt": "2024-01-01T00:00:00Z"}
                ]"#,
            )
            .route(
                "/api/reviews",
                200,
                r#"[
                    {"id": "r1", "name": "A", "rating": 5, "comment": "x", "approved": true, "createdAt": "2024-01-01T00:00:00Z"},
                    {"id": "r2", "name": "B", "rating": 3, "comment": "x", "approved": false, "createdAt": "2024-01-01T00:00:00Z"}
                ]"#,
            );
        let api = api(transport);

        let mut screen = DashboardScreen::new();
        screen.load(&api);

        assert_eq!(
            screen.stats,
            DashboardStats {
                products: 0,
                bookings: 2,
                pending_bookings: 1,
                reviews: 2,
                pending_reviews: 1,
            }
        );
        assert!(!screen.loading);
    }
}

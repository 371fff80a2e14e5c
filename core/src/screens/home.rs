//! Home screen: featured products strip plus recent approved reviews.
//!
//! The first load asks the backend to seed demonstration data (idempotent on
//! the backend side), then fans out the two list fetches concurrently. Each
//! arm degrades independently — a failed reviews fetch still renders the
//! featured products.

use std::thread;

use crate::api::Api;
use crate::clients::products::ProductFilter;
use crate::screens::items_or_empty;
use crate::transport::CancelToken;
use crate::types::{Product, Review};

const FEATURED_LIMIT: usize = 4;
const REVIEW_LIMIT: usize = 3;

pub struct HomeScreen {
    pub featured: Vec<Product>,
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub refreshing: bool,
    cancel: CancelToken,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            featured: Vec::new(),
            reviews: Vec::new(),
            loading: true,
            refreshing: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());

        match api.seed_demo_data() {
            Ok(message) => tracing::debug!(message = %message.message, "seed request complete"),
            Err(err) => tracing::warn!(error = %err, "seed request failed"),
        }

        let (products, reviews) = thread::scope(|s| {
            let products = s.spawn(|| api.list_products(&ProductFilter::featured_only()));
            let reviews = s.spawn(|| api.list_reviews(Some(true)));
            (products.join(), reviews.join())
        });

        let mut featured = items_or_empty(products, "featured products");
        featured.truncate(FEATURED_LIMIT);
        self.featured = featured;

        let mut reviews = items_or_empty(reviews, "reviews");
        reviews.truncate(REVIEW_LIMIT);
        self.reviews = reviews;

        self.loading = false;
        self.refreshing = false;
    }

    pub fn refresh(&mut self, api: &Api) {
        self.refreshing = true;
        self.load(api);
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

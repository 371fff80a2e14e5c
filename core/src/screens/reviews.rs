//! Public reviews screen: approved list plus the submission form.

use crate::api::Api;
use crate::error::ApiError;
use crate::transport::CancelToken;
use crate::types::{NewReview, Review};

pub struct ReviewsScreen {
    pub reviews: Vec<Review>,
    pub loading: bool,
    pub refreshing: bool,
    cancel: CancelToken,
}

impl ReviewsScreen {
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            loading: true,
            refreshing: false,
            cancel: CancelToken::new(),
        }
    }

    /// Only approved reviews are public.
    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());
        match api.list_reviews(Some(true)) {
            Ok(reviews) => self.reviews = reviews,
            Err(err) => tracing::warn!(error = %err, "failed to load reviews"),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn refresh(&mut self, api: &Api) {
        self.refreshing = true;
        self.load(api);
    }

    /// Submit the form. An empty name or comment fails the pre-check and no
    /// request is issued. The created review starts unapproved, so it is not
    /// added to the public list here.
    pub fn submit(&self, api: &Api, input: &NewReview) -> Result<Review, ApiError> {
        let api = api.scoped(self.cancel.clone());
        api.create_review(input)
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for ReviewsScreen {
    fn default() -> Self {
        Self::new()
    }
}

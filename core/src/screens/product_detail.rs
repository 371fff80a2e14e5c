//! Single-product detail screen.

use crate::api::Api;
use crate::transport::CancelToken;
use crate::types::Product;

/// Renders one product fetched by id. `product` stays `None` when the fetch
/// fails or the id is unknown; the renderer shows a not-found state for that.
pub struct ProductDetailScreen {
    pub product: Option<Product>,
    pub loading: bool,
    cancel: CancelToken,
}

impl ProductDetailScreen {
    pub fn new() -> Self {
        Self {
            product: None,
            loading: true,
            cancel: CancelToken::new(),
        }
    }

    pub fn load(&mut self, api: &Api, id: &str) {
        let api = api.scoped(self.cancel.clone());
        match api.get_product(id) {
            Ok(product) => self.product = Some(product),
            Err(err) => tracing::warn!(error = %err, "failed to load product {id}"),
        }
        self.loading = false;
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for ProductDetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

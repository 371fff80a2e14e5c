//! Products screen: full catalog with client-side filtering.
//!
//! Filtering never re-fetches. The visible list is derived from the last
//! fetched catalog, the selected category (`None` means "All"), and the
//! free-text query; the two constraints compose by intersection.

use crate::api::Api;
use crate::clients::products::ProductFilter;
use crate::transport::CancelToken;
use crate::types::{Category, Product};

pub struct ProductsScreen {
    products: Vec<Product>,
    pub selected_category: Option<Category>,
    pub search_query: String,
    pub loading: bool,
    pub refreshing: bool,
    cancel: CancelToken,
}

impl ProductsScreen {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            selected_category: None,
            search_query: String::new(),
            loading: true,
            refreshing: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn load(&mut self, api: &Api) {
        let api = api.scoped(self.cancel.clone());
        match api.list_products(&ProductFilter::default()) {
            Ok(products) => self.products = products,
            Err(err) => tracing::warn!(error = %err, "failed to load products"),
        }
        self.loading = false;
        self.refreshing = false;
    }

    pub fn refresh(&mut self, api: &Api) {
        self.refreshing = true;
        self.load(api);
    }

    /// `None` selects "All".
    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// The filtered view: category equality intersected with a
    /// case-insensitive substring match over name and description.
    pub fn visible(&self) -> Vec<&Product> {
        let query = self.search_query.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                self.selected_category
                    .is_none_or(|category| product.category == category)
            })
            .filter(|product| {
                query.is_empty()
                    || product.name.to_lowercase().contains(&query)
                    || product.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn unmount(&self) {
        self.cancel.cancel();
    }
}

impl Default for ProductsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(name: &str, description: &str, category: Category) -> Product {
        Product {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: description.to_string(),
            price: 100.0,
            category,
            image: "data:image/png;base64,AA==".to_string(),
            in_stock: true,
            featured: false,
            created_at: Utc::now(),
        }
    }

    fn screen() -> ProductsScreen {
        let mut screen = ProductsScreen::new();
        screen.products = vec![
            product("Foundation", "Liquid foundation with SPF", Category::Makeup),
            product("Face Cream", "Nourishing aloe cream", Category::Skincare),
            product("Perfume Set", "Premium fragrance gift set", Category::GiftItems),
            product("Shampoo", "Herbal haircare", Category::Haircare),
        ];
        screen
    }

    #[test]
    fn all_shows_the_full_list() {
        let screen = screen();
        assert_eq!(screen.visible().len(), 4);
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let mut screen = screen();
        screen.set_category(Some(Category::Makeup));
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Foundation");
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let mut screen = screen();
        screen.set_query("FOUNDATION");
        assert_eq!(screen.visible().len(), 1);

        screen.set_query("aloe");
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Face Cream");
    }

    #[test]
    fn category_and_search_compose_by_intersection() {
        let mut screen = screen();
        screen.set_category(Some(Category::GiftItems));
        screen.set_query("gift");
        assert_eq!(screen.visible().len(), 1);

        screen.set_query("foundation");
        assert!(screen.visible().is_empty());
    }

    #[test]
    fn clearing_the_category_restores_the_full_list() {
        let mut screen = screen();
        screen.set_category(Some(Category::Haircare));
        assert_eq!(screen.visible().len(), 1);
        screen.set_category(None);
        assert_eq!(screen.visible().len(), 4);
    }

    #[test]
    fn filtering_does_not_mutate_the_source_list() {
        let mut screen = screen();
        screen.set_query("foundation");
        let _ = screen.visible();
        screen.set_query("");
        assert_eq!(screen.visible().len(), 4);
    }
}

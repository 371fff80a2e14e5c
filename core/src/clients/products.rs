//! Client for `/api/products`.

use crate::clients::{ensure_success, json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Category, NewProduct, Product};

/// Optional equality filters for the product list. Absent means unfiltered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub featured: Option<bool>,
}

impl ProductFilter {
    /// Filter used by the home screen's featured strip.
    pub fn featured_only() -> Self {
        Self {
            category: None,
            featured: Some(true),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductsClient {
    base_url: String,
}

impl ProductsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self, filter: &ProductFilter) -> HttpRequest {
        let mut query = Vec::new();
        if let Some(category) = filter.category {
            query.push(("category".to_string(), category.to_string()));
        }
        if let Some(featured) = filter.featured {
            query.push(("featured".to_string(), featured.to_string()));
        }
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/products", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/products/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewProduct) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/products", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// Full replace; the backend keeps `id` and `createdAt`.
    pub fn build_update(&self, id: &str, input: &NewProduct) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/products/{id}", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/products/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        ensure_success(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ProductsClient {
        ProductsClient::new("http://localhost:8000")
    }

    #[test]
    fn build_list_unfiltered_has_no_query() {
        let req = client().build_list(&ProductFilter::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/products");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_with_filters_adds_query_pairs() {
        let filter = ProductFilter {
            category: Some(Category::GiftItems),
            featured: Some(true),
        };
        let req = client().build_list(&filter);
        assert_eq!(
            req.query,
            vec![
                ("category".to_string(), "Gift Items".to_string()),
                ("featured".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn build_get_targets_the_id() {
        let req = client().build_get("abc123");
        assert_eq!(req.path, "http://localhost:8000/api/products/abc123");
    }

    #[test]
    fn build_create_rejects_missing_name() {
        let input = NewProduct {
            name: String::new(),
            description: "desc".to_string(),
            price: 10.0,
            category: Category::Makeup,
            image: "data:image/png;base64,AA==".to_string(),
            in_stock: true,
            featured: false,
        };
        let err = client().build_create(&input).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn build_create_produces_json_post() {
        let input = NewProduct {
            name: "Foundation".to_string(),
            description: "Liquid foundation".to_string(),
            price: 699.0,
            category: Category::Makeup,
            image: "data:image/png;base64,AA==".to_string(),
            in_stock: true,
            featured: true,
        };
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.headers, vec![("content-type".to_string(), "application/json".to_string())]);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Foundation");
        assert_eq!(body["inStock"], true);
    }

    #[test]
    fn parse_get_maps_404_to_not_found() {
        let response = HttpResponse {
            status: 404,
            body: r#"{"detail":"Product not found"}"#.to_string(),
        };
        let err = client().parse_get(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse {
            status: 200,
            body: r#"[{
                "id": "p1",
                "name": "Foundation",
                "description": "Liquid foundation",
                "price": 699.0,
                "category": "Makeup",
                "image": "data:image/png;base64,AA==",
                "inStock": true,
                "featured": true,
                "createdAt": "2024-01-01T00:00:00Z"
            }]"#
            .to_string(),
        };
        let products = client().parse_list(response).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, Category::Makeup);
    }

    #[test]
    fn parse_list_bad_json() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = client().parse_list(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}

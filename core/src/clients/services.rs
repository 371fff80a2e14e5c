//! Client for `/api/services`.

use crate::clients::{ensure_success, json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewService, Service};

#[derive(Debug, Clone)]
pub struct ServicesClient {
    base_url: String,
}

impl ServicesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/services", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewService) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/services", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update(&self, id: &str, input: &NewService) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/services/{id}", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/services/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Service>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Service, ApiError> {
        parse_json(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Service, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        ensure_success(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServicesClient {
        ServicesClient::new("http://localhost:8000")
    }

    #[test]
    fn build_list_produces_plain_get() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/services");
        assert!(req.query.is_empty());
    }

    #[test]
    fn build_create_validates_required_fields() {
        let input = NewService {
            name: String::new(),
            description: "desc".to_string(),
            duration: "1 hour".to_string(),
            price: 999.0,
            image: "data:image/png;base64,AA==".to_string(),
            popular: false,
        };
        assert!(matches!(client().build_create(&input), Err(ApiError::Validation(_))));
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse {
            status: 200,
            body: r#"[{
                "id": "s1",
                "name": "Bridal Makeup",
                "description": "Complete package",
                "duration": "3 hours",
                "price": 8999.0,
                "image": "data:image/png;base64,AA==",
                "popular": true
            }]"#
            .to_string(),
        };
        let services = client().parse_list(response).unwrap();
        assert_eq!(services.len(), 1);
        assert!(services[0].popular);
    }

    #[test]
    fn parse_delete_maps_404() {
        let response = HttpResponse {
            status: 404,
            body: r#"{"detail":"Service not found"}"#.to_string(),
        };
        assert!(matches!(client().parse_delete(response), Err(ApiError::NotFound)));
    }
}

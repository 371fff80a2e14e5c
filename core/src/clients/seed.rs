//! Client for `/api/seed-data`.
//!
//! Side-effect-only call asking the backend to populate demonstration data.
//! Idempotence is the backend's contract: repeated calls must not duplicate
//! anything.

use crate::clients::parse_json;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Message;

#[derive(Debug, Clone)]
pub struct SeedClient {
    base_url: String,
}

impl SeedClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_seed(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/seed-data", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_seed(&self, response: HttpResponse) -> Result<Message, ApiError> {
        parse_json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_seed_is_an_empty_post() {
        let req = SeedClient::new("http://localhost:8000").build_seed();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/seed-data");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_seed_reads_acknowledgment() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"message": "Data already seeded"}"#.to_string(),
        };
        let message = SeedClient::new("http://localhost:8000").parse_seed(response).unwrap();
        assert_eq!(message.message, "Data already seeded");
    }
}

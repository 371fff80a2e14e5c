//! Client for `/api/reviews`.
//!
//! New reviews always start unapproved; the public reviews screen lists
//! `approved=true` only, so a fresh submission never shows up until an admin
//! flips it via `build_set_approved`.

use serde::Serialize;

use crate::clients::{json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewReview, Review};

#[derive(Serialize)]
struct ApprovedUpdate {
    approved: bool,
}

#[derive(Debug, Clone)]
pub struct ReviewsClient {
    base_url: String,
}

impl ReviewsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self, approved: Option<bool>) -> HttpRequest {
        let mut query = Vec::new();
        if let Some(approved) = approved {
            query.push(("approved".to_string(), approved.to_string()));
        }
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/reviews", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewReview) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/reviews", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_set_approved(&self, id: &str, approved: bool) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/reviews/{id}", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(&ApprovedUpdate { approved })?),
        })
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Review>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Review, ApiError> {
        parse_json(response)
    }

    pub fn parse_set_approved(&self, response: HttpResponse) -> Result<Review, ApiError> {
        parse_json(response)
    }
}

//! Client for `/api/gallery`. List, add, delete; no update.

use crate::clients::{ensure_success, json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{GalleryItem, NewGalleryItem};

#[derive(Debug, Clone)]
pub struct GalleryClient {
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/gallery", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewGalleryItem) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/gallery", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/gallery/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<GalleryItem>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<GalleryItem, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        ensure_success(&response)
    }
}

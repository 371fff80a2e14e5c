//! Client for `/api/bookings`.

use serde::Serialize;

use crate::clients::{json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Booking, BookingStatus, NewBooking};

/// Body for the status-only update, `{"status": "confirmed"}`.
#[derive(Serialize)]
struct StatusUpdate {
    status: BookingStatus,
}

#[derive(Debug, Clone)]
pub struct BookingsClient {
    base_url: String,
}

impl BookingsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self, status: Option<BookingStatus>) -> HttpRequest {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status".to_string(), status.to_string()));
        }
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/bookings", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewBooking) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/bookings", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_status(&self, id: &str, status: BookingStatus) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/bookings/{id}", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(&StatusUpdate { status })?),
        })
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Booking>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_status(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        parse_json(response)
    }
}

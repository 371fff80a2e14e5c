//! Wire schemas for the storefront backend.
//!
//! # Design
//! Every payload the backend exchanges is an explicit record type; nothing
//! in the crate passes loose JSON around. Field names are camelCase on the
//! wire (`inStock`, `createdAt`). `New*` types are the create payloads —
//! they never carry the server-owned `id`, `createdAt`, or moderation
//! fields, and each knows how to pre-check its own required fields before a
//! request is built. The pre-check is a UX nicety; the backend remains the
//! source of truth for validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApiError;

fn require(value: &str, field: &'static str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Fixed product category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Makeup,
    Skincare,
    Fragrances,
    Haircare,
    #[serde(rename = "Gift Items")]
    GiftItems,
}

impl Category {
    /// Every category, in the order the category picker shows them.
    pub const ALL: [Category; 5] = [
        Category::Makeup,
        Category::Skincare,
        Category::Fragrances,
        Category::Haircare,
        Category::GiftItems,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Makeup => "Makeup",
            Category::Skincare => "Skincare",
            Category::Fragrances => "Fragrances",
            Category::Haircare => "Haircare",
            Category::GiftItems => "Gift Items",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    /// Image URI, typically a data URI.
    pub image: String,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Create/replace payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image: String,
    pub in_stock: bool,
    pub featured: bool,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "name")?;
        require(&self.image, "image")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Human-readable, e.g. "45 mins".
    pub duration: String,
    pub price: f64,
    pub image: String,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: f64,
    pub image: String,
    pub popular: bool,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "name")?;
        require(&self.image, "image")
    }
}

/// Booking lifecycle state, owned by the backend after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking form payload. Status is server-assigned (`pending`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "name")?;
        require(&self.phone, "phone")?;
        require(&self.service, "service")?;
        require(&self.date, "date")?;
        require(&self.time, "time")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    /// 1 through 5.
    pub rating: u8,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Review form payload. Never carries `approved`; new reviews start
/// unapproved and only become publicly visible after an admin flips them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.name, "name")?;
        require(&self.comment, "comment")?;
        if !(1..=5).contains(&self.rating) {
            return Err(ApiError::Validation("rating must be between 1 and 5".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGalleryItem {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl NewGalleryItem {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.image, "image")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&self.username, "username")?;
        require(&self.password, "password")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
}

/// Acknowledgment body the backend sends for side-effect-only calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

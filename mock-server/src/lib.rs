//! In-memory implementation of the storefront backend HTTP surface.
//!
//! Faithful to the real backend's contract: FastAPI-style `{"detail": ...}`
//! error bodies, 200 on creates, `pending` default booking status, reviews
//! unapproved by default, and an idempotent seed endpoint. Ids are fresh
//! UUID strings; bookings, reviews, and gallery items list newest first.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const PLACEHOLDER_IMAGE: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

fn default_true() -> bool {
    true
}

fn default_status() -> String {
    "pending".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct BookingInput {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct ReviewInput {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: f64,
    pub image: String,
    pub popular: bool,
}

#[derive(Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct GalleryInput {
    pub image: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct Message {
    pub message: String,
}

#[derive(Default)]
pub struct Store {
    pub products: Vec<Product>,
    pub bookings: Vec<Booking>,
    pub reviews: Vec<Review>,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryItem>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiError = (StatusCode, Json<Value>);

fn not_found(what: &str) -> ApiError {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": format!("{what} not found") })))
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/{id}", axum::routing::put(update_booking))
        .route("/api/reviews", get(list_reviews).post(create_review))
        .route("/api/reviews/{id}", axum::routing::put(update_review))
        .route("/api/services", get(list_services).post(create_service))
        .route(
            "/api/services/{id}",
            axum::routing::put(update_service).delete(delete_service),
        )
        .route("/api/gallery", get(list_gallery).post(add_gallery_item))
        .route("/api/gallery/{id}", delete(delete_gallery_item))
        .route("/api/admin/login", post(admin_login))
        .route("/api/seed-data", post(seed_data))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- products ---

#[derive(Deserialize)]
pub struct ProductQuery {
    category: Option<String>,
    featured: Option<bool>,
}

async fn list_products(State(db): State<Db>, Query(query): Query<ProductQuery>) -> Json<Vec<Product>> {
    let store = db.read().await;
    let products = store
        .products
        .iter()
        .filter(|p| query.category.as_deref().is_none_or(|c| p.category == c))
        .filter(|p| query.featured.is_none_or(|f| p.featured == f))
        .cloned()
        .collect();
    Json(products)
}

async fn get_product(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    let store = db.read().await;
    store
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Product"))
}

async fn create_product(State(db): State<Db>, Json(input): Json<ProductInput>) -> Json<Product> {
    let product = Product {
        id: new_id(),
        name: input.name,
        description: input.description,
        price: input.price,
        category: input.category,
        image: input.image,
        in_stock: input.in_stock,
        featured: input.featured,
        created_at: Utc::now(),
    };
    db.write().await.products.push(product.clone());
    Json(product)
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let mut store = db.write().await;
    let product = store
        .products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found("Product"))?;
    product.name = input.name;
    product.description = input.description;
    product.price = input.price;
    product.category = input.category;
    product.image = input.image;
    product.in_stock = input.in_stock;
    product.featured = input.featured;
    Ok(Json(product.clone()))
}

async fn delete_product(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Message>, ApiError> {
    let mut store = db.write().await;
    let before = store.products.len();
    store.products.retain(|p| p.id != id);
    if store.products.len() == before {
        return Err(not_found("Product"));
    }
    Ok(Json(Message {
        message: "Product deleted successfully".to_string(),
    }))
}

// --- bookings ---

#[derive(Deserialize)]
pub struct BookingQuery {
    status: Option<String>,
}

async fn list_bookings(State(db): State<Db>, Query(query): Query<BookingQuery>) -> Json<Vec<Booking>> {
    let store = db.read().await;
    let bookings = store
        .bookings
        .iter()
        .rev()
        .filter(|b| query.status.as_deref().is_none_or(|s| b.status == s))
        .cloned()
        .collect();
    Json(bookings)
}

async fn create_booking(State(db): State<Db>, Json(input): Json<BookingInput>) -> Json<Booking> {
    let booking = Booking {
        id: new_id(),
        name: input.name,
        phone: input.phone,
        email: input.email,
        service: input.service,
        date: input.date,
        time: input.time,
        message: input.message,
        status: input.status,
        created_at: Utc::now(),
    };
    db.write().await.bookings.push(booking.clone());
    Json(booking)
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    status: String,
}

async fn update_booking(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<StatusUpdate>,
) -> Result<Json<Booking>, ApiError> {
    let mut store = db.write().await;
    let booking = store
        .bookings
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| not_found("Booking"))?;
    booking.status = input.status;
    Ok(Json(booking.clone()))
}

// --- reviews ---

#[derive(Deserialize)]
pub struct ReviewQuery {
    approved: Option<bool>,
}

async fn list_reviews(State(db): State<Db>, Query(query): Query<ReviewQuery>) -> Json<Vec<Review>> {
    let store = db.read().await;
    let reviews = store
        .reviews
        .iter()
        .rev()
        .filter(|r| query.approved.is_none_or(|a| r.approved == a))
        .cloned()
        .collect();
    Json(reviews)
}

async fn create_review(State(db): State<Db>, Json(input): Json<ReviewInput>) -> Json<Review> {
    let review = Review {
        id: new_id(),
        name: input.name,
        rating: input.rating,
        comment: input.comment,
        approved: input.approved,
        created_at: Utc::now(),
    };
    db.write().await.reviews.push(review.clone());
    Json(review)
}

#[derive(Deserialize)]
pub struct ApprovedUpdate {
    approved: bool,
}

async fn update_review(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ApprovedUpdate>,
) -> Result<Json<Review>, ApiError> {
    let mut store = db.write().await;
    let review = store
        .reviews
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| not_found("Review"))?;
    review.approved = input.approved;
    Ok(Json(review.clone()))
}

// --- services ---

async fn list_services(State(db): State<Db>) -> Json<Vec<Service>> {
    Json(db.read().await.services.clone())
}

async fn create_service(State(db): State<Db>, Json(input): Json<ServiceInput>) -> Json<Service> {
    let service = Service {
        id: new_id(),
        name: input.name,
        description: input.description,
        duration: input.duration,
        price: input.price,
        image: input.image,
        popular: input.popular,
    };
    db.write().await.services.push(service.clone());
    Json(service)
}

async fn update_service(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Service>, ApiError> {
    let mut store = db.write().await;
    let service = store
        .services
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| not_found("Service"))?;
    service.name = input.name;
    service.description = input.description;
    service.duration = input.duration;
    service.price = input.price;
    service.image = input.image;
    service.popular = input.popular;
    Ok(Json(service.clone()))
}

async fn delete_service(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Message>, ApiError> {
    let mut store = db.write().await;
    let before = store.services.len();
    store.services.retain(|s| s.id != id);
    if store.services.len() == before {
        return Err(not_found("Service"));
    }
    Ok(Json(Message {
        message: "Service deleted successfully".to_string(),
    }))
}

// --- gallery ---

async fn list_gallery(State(db): State<Db>) -> Json<Vec<GalleryItem>> {
    let store = db.read().await;
    Json(store.gallery.iter().rev().cloned().collect())
}

async fn add_gallery_item(State(db): State<Db>, Json(input): Json<GalleryInput>) -> Json<GalleryItem> {
    let item = GalleryItem {
        id: new_id(),
        image: input.image,
        caption: input.caption,
        created_at: Utc::now(),
    };
    db.write().await.gallery.push(item.clone());
    Json(item)
}

async fn delete_gallery_item(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Message>, ApiError> {
    let mut store = db.write().await;
    let before = store.gallery.len();
    store.gallery.retain(|g| g.id != id);
    if store.gallery.len() == before {
        return Err(not_found("Gallery item"));
    }
    Ok(Json(Message {
        message: "Gallery item deleted successfully".to_string(),
    }))
}

// --- admin ---

async fn admin_login(Json(input): Json<LoginInput>) -> Result<Json<LoginResponse>, ApiError> {
    if input.username == "admin" && input.password == "admin123" {
        Ok(Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            token: Some(format!("admin_token_{}", input.username)),
        }))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid credentials" })),
        ))
    }
}

// --- seed ---

async fn seed_data(State(db): State<Db>) -> Json<Message> {
    let mut store = db.write().await;
    if !store.products.is_empty() {
        return Json(Message {
            message: "Data already seeded".to_string(),
        });
    }

    let products = [
        (
            "Lakme Perfecting Liquid Foundation",
            "Flawless finish foundation with SPF 25. Lightweight and long-lasting.",
            699.0,
            "Makeup",
        ),
        (
            "Maybelline Fit Me Foundation",
            "Lightweight foundation that matches your skin tone perfectly.",
            499.0,
            "Makeup",
        ),
        (
            "Himalaya Nourishing Face Cream",
            "Intensive nourishment for soft, supple skin. Enriched with aloe vera.",
            175.0,
            "Skincare",
        ),
        (
            "Engage Perfume Gift Set",
            "Premium fragrance gift set perfect for any occasion.",
            1299.0,
            "Gift Items",
        ),
    ];
    for (name, description, price, category) in products {
        store.products.push(Product {
            id: new_id(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            in_stock: true,
            featured: true,
            created_at: Utc::now(),
        });
    }

    let services = [
        (
            "Bridal Makeup",
            "Complete bridal makeup package with hair styling and draping.",
            "3 hours",
            8999.0,
            true,
        ),
        (
            "Party Makeup",
            "Glamorous party makeup to make you stand out.",
            "1.5 hours",
            2499.0,
            true,
        ),
        (
            "Facial Treatment",
            "Deep cleansing and nourishing facial treatment.",
            "1 hour",
            999.0,
            false,
        ),
    ];
    for (name, description, duration, price, popular) in services {
        store.services.push(Service {
            id: new_id(),
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            price,
            image: PLACEHOLDER_IMAGE.to_string(),
            popular,
        });
    }

    let reviews = [
        (
            "Priya Sharma",
            5,
            "Amazing service! The bridal makeup was absolutely stunning. Highly recommend!",
        ),
        (
            "Anjali Verma",
            5,
            "Great collection of products and very helpful staff. Love shopping here!",
        ),
        (
            "Sneha Patel",
            4,
            "Good quality products at reasonable prices. Will visit again.",
        ),
    ];
    for (name, rating, comment) in reviews {
        store.reviews.push(Review {
            id: new_id(),
            name: name.to_string(),
            rating,
            comment: comment.to_string(),
            approved: true,
            created_at: Utc::now(),
        });
    }

    Json(Message {
        message: "Data seeded successfully".to_string(),
    })
}

//! Admin session holder.
//!
//! # Design
//! The admin token is the app's single piece of durable local state: an
//! opaque string persisted through a `TokenStore`. Its presence gates admin
//! screen routing on the client only — the backend must still authorize
//! every admin-mutating request.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::api::Api;
use crate::error::ApiError;
use crate::types::LoginRequest;

/// Persistence for the single admin-token entry.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), ApiError>;
    fn clear(&self) -> Result<(), ApiError>;
}

/// Token persisted as a plain file at a caller-chosen path.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        Some(token)
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ApiError::Storage(err.to_string()))?;
        }
        fs::write(&self.path, token).map_err(|err| ApiError::Storage(err.to_string()))
    }

    fn clear(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApiError::Storage(err.to_string())),
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

pub struct AdminSession<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Advisory routing check, not a security boundary.
    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some_and(|token| !token.is_empty())
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Log in and persist the returned token. A 401 surfaces as
    /// `ApiError::Http` with the server's detail message.
    pub fn login(&self, api: &Api, username: &str, password: &str) -> Result<(), ApiError> {
        let input = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = api.login(&input)?;
        match response.token {
            Some(token) if response.success && !token.is_empty() => self.store.save(&token),
            _ => Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            }),
        }
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.clear()
    }
}

//! Client for `/api/admin/login`.
//!
//! The backend answers 200 `{success, message, token}` on valid credentials
//! and 401 `{"detail": "Invalid credentials"}` otherwise; the 401 surfaces
//! as `ApiError::Http` carrying the server's detail.

use crate::clients::{json_headers, parse_json, to_json};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{LoginRequest, LoginResponse};

#[derive(Debug, Clone)]
pub struct AdminClient {
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_login(&self, input: &LoginRequest) -> Result<HttpRequest, ApiError> {
        input.validate()?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/admin/login", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<LoginResponse, ApiError> {
        parse_json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AdminClient {
        AdminClient::new("http://localhost:8000")
    }

    #[test]
    fn build_login_requires_both_fields() {
        let input = LoginRequest {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(matches!(client().build_login(&input), Err(ApiError::Validation(_))));
    }

    #[test]
    fn build_login_produces_json_post() {
        let input = LoginRequest {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        let req = client().build_login(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/admin/login");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "admin");
    }

    #[test]
    fn parse_login_success_carries_token() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"success": true, "message": "Login successful", "token": "admin_token_admin"}"#.to_string(),
        };
        let login = client().parse_login(response).unwrap();
        assert!(login.success);
        assert_eq!(login.token.as_deref(), Some("admin_token_admin"));
    }

    #[test]
    fn parse_login_401_surfaces_server_detail() {
        let response = HttpResponse {
            status: 401,
            body: r#"{"detail":"Invalid credentials"}"#.to_string(),
        };
        match client().parse_login(response).unwrap_err() {
            ApiError::Http { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }
}

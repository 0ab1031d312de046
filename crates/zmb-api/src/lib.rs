//! # zmb-api
//!
//! HTTP client for the Zumbara storefront backend.
//!
//! The backend owns pricing, inventory, order state and payment verification.
//! This crate only builds requests and maps responses:
//! - catalog: category listing by parent, admin category creation
//! - products: filtered, paginated listing and detail
//! - orders: paginated history and detail
//! - payment proofs: multipart upload to the asset host, submission, admin review

pub mod catalog;
pub mod orders;
pub mod products;
pub mod proofs;

mod error;
mod http;

pub use error::ApiError;
pub use products::ProductQuery;

use std::time::Duration;

use zmb_config::ApiConfig;

// ── Session ────────────────────────────────────────────────────────

/// Signed-in state passed explicitly to the client.
///
/// Issuing and refreshing tokens is the backend's job; the client only
/// attaches whatever token it was handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session carrying a bearer token. Blank tokens yield an anonymous session.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the storefront REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base().to_string(),
            session,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.authorize(self.http.get(url))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.authorize(self.http.post(url))
    }

    fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%url, "PATCH");
        self.authorize(self.http.patch(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bearer_is_anonymous() {
        assert!(!Session::bearer("  ").is_signed_in());
        assert!(Session::bearer("tok").is_signed_in());
        assert_eq!(Session::default(), Session::anonymous());
    }

    #[test]
    fn client_trims_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:4000/api/".into(),
            ..Default::default()
        };
        let client = ApiClient::new(&config, Session::anonymous()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000/api");
        assert_eq!(client.url("/categories"), "http://localhost:4000/api/categories");
    }

    #[test]
    fn authorized_requests_carry_bearer_token() {
        let client = ApiClient::new(&ApiConfig::default(), Session::bearer("tok-1")).unwrap();
        let request = client.get("/orders").build().unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer tok-1"
        );
    }

    #[test]
    fn anonymous_requests_have_no_authorization() {
        let client = ApiClient::new(&ApiConfig::default(), Session::anonymous()).unwrap();
        let request = client.get("/categories").build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}

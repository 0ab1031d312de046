//! Product endpoints.

use zmb_core::entities::{Page, Product};

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

/// Backend cap on page size.
const MAX_LIMIT: u32 = 100;

/// Filters for a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: 1,
            limit: 20,
        }
    }
}

impl ProductQuery {
    fn to_path(&self) -> String {
        let mut path = format!(
            "/products?page={}&limit={}",
            self.page.max(1),
            self.limit.clamp(1, MAX_LIMIT)
        );
        if let Some(category) = &self.category {
            path.push_str("&category=");
            path.push_str(&urlencoding::encode(category));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search.trim()));
        }
        path
    }
}

impl ApiClient {
    /// List products matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let resp = check_response(self.get(&query.to_path()).send().await?).await?;
        decode(resp).await
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or any transport /
    /// status error.
    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        let path = format!("/products/{}", urlencoding::encode(id));
        let resp = check_response(self.get(&path).send().await?).await?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_query_path() {
        assert_eq!(ProductQuery::default().to_path(), "/products?page=1&limit=20");
    }

    #[test]
    fn query_clamps_and_encodes() {
        let query = ProductQuery {
            category: Some("c-1".into()),
            search: Some(" coffee beans ".into()),
            page: 0,
            limit: 500,
        };
        assert_eq!(
            query.to_path(),
            "/products?page=1&limit=100&category=c-1&search=coffee%20beans"
        );
    }

    #[test]
    fn blank_search_is_dropped() {
        let query = ProductQuery {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert!(!query.to_path().contains("search"));
    }
}

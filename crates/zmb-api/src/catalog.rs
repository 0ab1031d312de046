//! Category endpoints.

use zmb_core::entities::{Category, NewCategory};

use crate::http::{ListBody, check_response, decode};
use crate::{ApiClient, ApiError};

/// Path and query for a category listing. `None` asks for the root level.
fn categories_path(parent: Option<&str>) -> String {
    match parent {
        Some(parent) => format!("/categories?parent={}", urlencoding::encode(parent)),
        None => String::from("/categories"),
    }
}

impl ApiClient {
    /// List the children of `parent`, in backend display order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a category list.
    pub async fn categories(&self, parent: Option<&str>) -> Result<Vec<Category>, ApiError> {
        let resp = check_response(self.get(&categories_path(parent)).send().await?).await?;
        let body: ListBody<Category> = decode(resp).await?;
        let categories = body.into_vec();
        tracing::debug!(
            parent = parent.unwrap_or("<root>"),
            count = categories.len(),
            "fetched categories"
        );
        Ok(categories)
    }

    /// Create a category (admin).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without an admin session, or any
    /// transport / status error.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let resp = check_response(self.post("/categories").json(category).send().await?).await?;
        decode(resp).await
    }
}

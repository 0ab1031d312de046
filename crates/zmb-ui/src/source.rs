//! Where the navigator gets child categories from.

use async_trait::async_trait;
use zmb_api::{ApiClient, ApiError};
use zmb_core::catalog::CategoryForest;
use zmb_core::entities::Category;

/// Lists the children of a category. `None` asks for the root level.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn children(&self, parent: Option<&str>) -> Result<Vec<Category>, ApiError>;
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn children(&self, parent: Option<&str>) -> Result<Vec<Category>, ApiError> {
        self.categories(parent).await
    }
}

/// Offline catalogs answer from memory and never fail.
#[async_trait]
impl CatalogSource for CategoryForest {
    async fn children(&self, parent: Option<&str>) -> Result<Vec<Category>, ApiError> {
        Ok(self.children_of(parent))
    }
}

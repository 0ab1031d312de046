//! Order history endpoints. Requires a signed-in session.

use zmb_core::entities::{Order, Page};

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// One page of the signed-in customer's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a session, or any transport /
    /// status / parse error.
    pub async fn orders(&self, page: u32, limit: u32) -> Result<Page<Order>, ApiError> {
        let path = format!("/orders?page={}&limit={}", page.max(1), limit.max(1));
        let resp = check_response(self.get(&path).send().await?).await?;
        decode(resp).await
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or any transport /
    /// status error.
    pub async fn order(&self, id: &str) -> Result<Order, ApiError> {
        let path = format!("/orders/{}", urlencoding::encode(id));
        let resp = check_response(self.get(&path).send().await?).await?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use zmb_core::enums::OrderStatus;

    use super::*;

    const FIXTURE: &str = r#"{
        "items": [
            {"id":"o-2","status":"pending_payment","total":950.0,"currency":"ETB","createdAt":"2026-10-01T10:00:00Z"},
            {"id":"o-1","status":"delivered","total":300.0,"currency":"ETB","createdAt":"2026-09-12T07:30:00Z"}
        ],
        "page": 1,
        "limit": 2,
        "total": 5
    }"#;

    #[test]
    fn parse_order_page() {
        let page: Page<Order> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, OrderStatus::PendingPayment);
        assert!(page.items[1].status.is_final());
        assert!(page.has_more());
    }
}

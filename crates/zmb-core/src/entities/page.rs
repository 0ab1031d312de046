use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One page of a paginated listing. Pages are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    ///
    /// A short page always ends the listing, even when `total` claims more.
    #[must_use]
    pub fn has_more(&self) -> bool {
        if self.items.is_empty() || self.items.len() < self.limit as usize {
            return false;
        }
        u64::from(self.page) * u64::from(self.limit) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    fn page(len: usize, page: u32, limit: u32, total: u64) -> Page<u32> {
        Page {
            items: (0..len as u32).collect(),
            page,
            limit,
            total,
        }
    }

    #[test]
    fn full_page_below_total_has_more() {
        assert!(page(10, 1, 10, 25).has_more());
        assert!(page(10, 2, 10, 25).has_more());
    }

    #[test]
    fn last_page_has_no_more() {
        assert!(!page(5, 3, 10, 25).has_more());
        assert!(!page(10, 2, 10, 20).has_more());
    }

    #[test]
    fn empty_page_ends_listing() {
        assert!(!page(0, 1, 10, 100).has_more());
    }
}

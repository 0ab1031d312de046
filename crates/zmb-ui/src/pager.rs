//! Infinite-scroll accumulator for paginated listings (order history).
//!
//! The caller asks for the next page with [`Pager::begin_load`], performs the
//! request, and hands the result back with the issued token. Only the most
//! recent token is applied; results for older tokens are dropped.

use std::collections::HashSet;

use zmb_api::ApiError;
use zmb_core::entities::{Order, Page, Product};

use crate::notice::Notices;

/// Items that can be de-duplicated across pages.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Order {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

/// What to fetch next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub token: u64,
    pub page: u32,
    pub limit: u32,
}

/// What [`Pager::complete`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Appended this many new items.
    Appended(usize),
    /// The token was not the outstanding one.
    Stale,
    /// The request failed; items are kept and the page can be retried.
    Failed,
}

#[derive(Debug)]
pub struct Pager<T> {
    items: Vec<T>,
    seen: HashSet<String>,
    next_page: u32,
    limit: u32,
    exhausted: bool,
    next_token: u64,
    pending: Option<u64>,
    notices: Notices,
}

impl<T: Keyed> Pager<T> {
    #[must_use]
    pub fn new(limit: u32, notices: Notices) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            next_page: 1,
            limit: limit.max(1),
            exhausted: false,
            next_token: 0,
            pending: None,
            notices,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// No further pages will be requested.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Request the next page, unless one is in flight or the listing ended.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.exhausted || self.pending.is_some() {
            return None;
        }
        self.next_token += 1;
        self.pending = Some(self.next_token);
        Some(PageRequest {
            token: self.next_token,
            page: self.next_page,
            limit: self.limit,
        })
    }

    /// Apply the result of the request issued with `token`.
    pub fn complete(&mut self, token: u64, result: Result<Page<T>, ApiError>) -> PageOutcome {
        if self.pending != Some(token) {
            tracing::debug!(token, pending = ?self.pending, "dropping stale page");
            return PageOutcome::Stale;
        }
        self.pending = None;

        let page = match result {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(%error, page = self.next_page, "page load failed");
                self.notices.api_error(&error);
                return PageOutcome::Failed;
            }
        };

        // A missing total (0) means only a short page ends the listing.
        let short = page.items.len() < self.limit as usize;
        let more = if page.total == 0 { !short } else { page.has_more() };
        let mut appended = 0;
        for item in page.items {
            if self.seen.insert(item.key().to_string()) {
                self.items.push(item);
                appended += 1;
            }
        }
        self.next_page += 1;
        if short || !more {
            self.exhausted = true;
        }
        PageOutcome::Appended(appended)
    }

    /// Drop everything and start again from page 1.
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.next_page = 1;
        self.exhausted = false;
        self.pending = None;
    }
}

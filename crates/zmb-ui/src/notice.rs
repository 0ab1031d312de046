//! Transient, dismissible notices (toasts).
//!
//! Notices carry a translation key rather than rendered text so the front
//! end can localize them. The queue is a cheap cloneable handle: pages hand
//! the same handle to every component that reports to the user.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use zmb_api::ApiError;

/// Default number of notices kept before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    /// Translation key (e.g. `errors.network`).
    pub key: String,
    /// Placeholder values for the translated text.
    pub args: Vec<(String, String)>,
    /// Untranslated technical detail, shown in verbose mode.
    pub detail: Option<String>,
}

#[derive(Debug)]
struct Queue {
    items: VecDeque<Notice>,
    next_id: u64,
    capacity: usize,
}

/// Shared notice queue.
#[derive(Debug, Clone)]
pub struct Notices {
    queue: Arc<Mutex<Queue>>,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Notices {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue {
                items: VecDeque::with_capacity(capacity),
                next_id: 1,
                capacity: capacity.max(1),
            })),
        }
    }

    /// Queue a notice and return its id.
    pub fn push(
        &self,
        level: NoticeLevel,
        key: &str,
        args: Vec<(String, String)>,
        detail: Option<String>,
    ) -> u64 {
        let mut queue = self.queue.lock();
        let id = queue.next_id;
        queue.next_id += 1;
        if queue.items.len() == queue.capacity {
            queue.items.pop_front();
        }
        queue.items.push_back(Notice {
            id,
            level,
            key: key.to_string(),
            args,
            detail,
        });
        id
    }

    pub fn info(&self, key: &str) -> u64 {
        self.push(NoticeLevel::Info, key, Vec::new(), None)
    }

    pub fn success(&self, key: &str) -> u64 {
        self.push(NoticeLevel::Success, key, Vec::new(), None)
    }

    /// Queue the error notice matching an API failure.
    pub fn api_error(&self, error: &ApiError) -> u64 {
        let args = match error {
            ApiError::RateLimited { retry_after_secs } => {
                vec![("seconds".to_string(), retry_after_secs.to_string())]
            }
            _ => Vec::new(),
        };
        self.push(
            NoticeLevel::Error,
            error_key(error),
            args,
            Some(error.to_string()),
        )
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut queue = self.queue.lock();
        let before = queue.items.len();
        queue.items.retain(|notice| notice.id != id);
        queue.items.len() != before
    }

    /// Take every queued notice, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        self.queue.lock().items.drain(..).collect()
    }

    /// Copy of the queued notices, oldest first.
    #[must_use]
    pub fn peek(&self) -> Vec<Notice> {
        self.queue.lock().items.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Translation key for an API failure.
#[must_use]
pub fn error_key(error: &ApiError) -> &'static str {
    match error {
        ApiError::NotFound { .. } => "errors.not_found",
        ApiError::Unauthorized { .. } => "errors.unauthorized",
        ApiError::RateLimited { .. } => "errors.rate_limited",
        ApiError::Http(_)
        | ApiError::Api { .. }
        | ApiError::Parse(_)
        | ApiError::InvalidUpload(_)
        | ApiError::Io(_) => "errors.network",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_increase_and_dismiss_removes() {
        let notices = Notices::default();
        let first = notices.info("a");
        let second = notices.success("b");
        assert!(second > first);

        assert!(notices.dismiss(first));
        assert!(!notices.dismiss(first));
        let keys: Vec<String> = notices.peek().into_iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["b"]);
    }

    #[test]
    fn capacity_drops_oldest() {
        let notices = Notices::with_capacity(2);
        notices.info("one");
        notices.info("two");
        notices.info("three");
        let keys: Vec<String> = notices.drain().into_iter().map(|n| n.key).collect();
        assert_eq!(keys, vec!["two", "three"]);
        assert!(notices.is_empty());
    }

    #[test]
    fn clones_share_the_queue() {
        let notices = Notices::default();
        let handle = notices.clone();
        handle.info("shared");
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn rate_limit_notice_carries_seconds() {
        let notices = Notices::default();
        notices.api_error(&ApiError::RateLimited {
            retry_after_secs: 12,
        });
        let notice = notices.drain().remove(0);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.key, "errors.rate_limited");
        assert_eq!(notice.args, vec![("seconds".to_string(), "12".to_string())]);
        assert!(notice.detail.is_some());
    }

    #[test]
    fn error_keys_by_kind() {
        assert_eq!(
            error_key(&ApiError::NotFound {
                resource: "/orders/x".into()
            }),
            "errors.not_found"
        );
        assert_eq!(
            error_key(&ApiError::Unauthorized { status: 401 }),
            "errors.unauthorized"
        );
        assert_eq!(error_key(&ApiError::Parse("x".into())), "errors.network");
    }
}

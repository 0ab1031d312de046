//! Category drill-down navigator shared by the home page and the category
//! browser.
//!
//! The navigator owns a [`NavigationPath`] (root plus every category the user
//! drilled into) and the category list currently on screen. Both change
//! together, and only when a fetch for the new level succeeds, so the list on
//! screen always belongs to the last level of the path.
//!
//! ```text
//!            descend(c) ok                 ascend() ok
//!   [root] ───────────────► [root, c] ───────────────► [root]
//!     │                         │
//!     │ fetch failed            │ fetch failed
//!     ▼                         ▼
//!   unchanged + error notice  unchanged + error notice
//! ```
//!
//! Every fetch takes a generation token. When a newer operation starts
//! before an older one resolves, the older result is discarded on arrival,
//! success or failure alike.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use thiserror::Error;
use zmb_api::ApiError;
use zmb_core::entities::Category;

use crate::notice::Notices;
use crate::source::CatalogSource;

// ── Path ───────────────────────────────────────────────────────────

/// One visited level. Level 0 is always [`Level::Root`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Level {
    Root,
    Category(Category),
}

/// Immutable, non-empty sequence of visited levels.
///
/// Transitions build a new path instead of editing this one, so a snapshot
/// handed to the renderer never changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPath {
    levels: Arc<[Level]>,
}

impl Default for NavigationPath {
    fn default() -> Self {
        Self::root()
    }
}

impl NavigationPath {
    #[must_use]
    pub fn root() -> Self {
        Self {
            levels: Arc::from(vec![Level::Root]),
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of levels, root included. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; the root level cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels below the root (0 at root).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The category whose children are on screen, or `None` at root.
    #[must_use]
    pub fn current(&self) -> Option<&Category> {
        match self.levels.last() {
            Some(Level::Category(category)) => Some(category),
            _ => None,
        }
    }

    /// Parent reference for the children of the last level.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.current().map(|category| category.id.as_str())
    }

    /// Visited categories, root excluded, outermost first.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.levels.iter().filter_map(|level| match level {
            Level::Root => None,
            Level::Category(category) => Some(category),
        })
    }

    #[must_use]
    pub fn push(&self, category: Category) -> Self {
        let mut levels = self.levels.to_vec();
        levels.push(Level::Category(category));
        Self {
            levels: levels.into(),
        }
    }

    /// Path cut back to `depth` (0 = root). Depths past the end keep everything.
    #[must_use]
    pub fn truncate(&self, depth: usize) -> Self {
        let keep = (depth + 1).min(self.levels.len());
        Self {
            levels: Arc::from(&self.levels[..keep]),
        }
    }
}

impl Serialize for NavigationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.levels.iter())
    }
}

// ── Snapshot ───────────────────────────────────────────────────────

/// What the renderer draws: path, on-screen list, loading flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub path: NavigationPath,
    pub categories: Arc<[Category]>,
    pub loading: bool,
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Snapshot", 4)?;
        state.serialize_field("depth", &self.path.depth())?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("categories", &*self.categories)?;
        state.serialize_field("loading", &self.loading)?;
        state.end()
    }
}

// ── Navigator ──────────────────────────────────────────────────────

/// Result of a navigation call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The fetched level is now on screen.
    Applied,
    /// A newer operation started first; this result was discarded.
    Superseded,
    /// Nothing to do (e.g. `ascend` at root). No fetch was issued.
    Unchanged,
}

#[derive(Debug, Error)]
pub enum NavigatorError {
    /// The catalog fetch failed. State is unchanged and an error notice was queued.
    #[error("category fetch failed: {0}")]
    Fetch(#[from] ApiError),

    /// The navigator was unmounted; results are no longer applied.
    #[error("navigator is unmounted")]
    Unmounted,

    /// `descend` was given a category that is not on screen.
    #[error("category '{id}' is not in the displayed list")]
    NotDisplayed { id: String },
}

#[derive(Debug)]
struct Inner {
    path: NavigationPath,
    categories: Arc<[Category]>,
    /// Token of the most recently issued fetch.
    latest: u64,
    /// Token still awaiting its result, if any.
    pending: Option<u64>,
    mounted: bool,
}

/// Drill-down state for one page. Not shared between pages.
pub struct Navigator<S: CatalogSource + ?Sized> {
    source: Arc<S>,
    notices: Notices,
    inner: Mutex<Inner>,
}

impl<S: CatalogSource + ?Sized> Navigator<S> {
    /// A navigator at root with an empty list. Call [`Self::load_root`] on mount.
    #[must_use]
    pub fn new(source: Arc<S>, notices: Notices) -> Self {
        Self {
            source,
            notices,
            inner: Mutex::new(Inner {
                path: NavigationPath::root(),
                categories: Arc::from(Vec::new()),
                latest: 0,
                pending: None,
                mounted: true,
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        Snapshot {
            path: inner.path.clone(),
            categories: Arc::clone(&inner.categories),
            loading: inner.pending.is_some(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().pending.is_some()
    }

    #[must_use]
    pub const fn notices(&self) -> &Notices {
        &self.notices
    }

    /// Fetch the root level (mount effect).
    ///
    /// # Errors
    ///
    /// See [`NavigatorError`].
    pub async fn load_root(&self) -> Result<Outcome, NavigatorError> {
        self.ensure_mounted()?;
        self.navigate(NavigationPath::root(), "load_root").await
    }

    /// Drill into `category`, which must be on screen.
    ///
    /// On success the path gains `category` and the list becomes its
    /// children, even when there are none.
    ///
    /// # Errors
    ///
    /// See [`NavigatorError`].
    pub async fn descend(&self, category: &Category) -> Result<Outcome, NavigatorError> {
        let target = {
            let inner = self.inner.lock();
            if !inner.mounted {
                return Err(NavigatorError::Unmounted);
            }
            if !inner.categories.iter().any(|shown| shown.id == category.id) {
                return Err(NavigatorError::NotDisplayed {
                    id: category.id.clone(),
                });
            }
            inner.path.push(category.clone())
        };
        self.navigate(target, "descend").await
    }

    /// Go up one level. At root this is a no-op and issues no fetch.
    ///
    /// # Errors
    ///
    /// See [`NavigatorError`].
    pub async fn ascend(&self) -> Result<Outcome, NavigatorError> {
        let target = {
            let inner = self.inner.lock();
            if !inner.mounted {
                return Err(NavigatorError::Unmounted);
            }
            match inner.path.depth() {
                0 => return Ok(Outcome::Unchanged),
                depth => inner.path.truncate(depth - 1),
            }
        };
        self.navigate(target, "ascend").await
    }

    /// Breadcrumb click: cut the path back to `depth` (0 = root) and refetch.
    /// Jumping to the current depth or deeper is a no-op.
    ///
    /// # Errors
    ///
    /// See [`NavigatorError`].
    pub async fn jump_to(&self, depth: usize) -> Result<Outcome, NavigatorError> {
        let target = {
            let inner = self.inner.lock();
            if !inner.mounted {
                return Err(NavigatorError::Unmounted);
            }
            if depth >= inner.path.depth() {
                return Ok(Outcome::Unchanged);
            }
            inner.path.truncate(depth)
        };
        self.navigate(target, "jump_to").await
    }

    /// Refetch the current level. Failures are never retried automatically;
    /// this is the manual retry.
    ///
    /// # Errors
    ///
    /// See [`NavigatorError`].
    pub async fn reload(&self) -> Result<Outcome, NavigatorError> {
        let target = {
            let inner = self.inner.lock();
            if !inner.mounted {
                return Err(NavigatorError::Unmounted);
            }
            inner.path.clone()
        };
        self.navigate(target, "reload").await
    }

    /// Stop applying results. In-flight fetches finish but are discarded.
    pub fn unmount(&self) {
        let mut inner = self.inner.lock();
        inner.mounted = false;
        inner.pending = None;
    }

    fn ensure_mounted(&self) -> Result<(), NavigatorError> {
        if self.inner.lock().mounted {
            Ok(())
        } else {
            Err(NavigatorError::Unmounted)
        }
    }

    async fn navigate(
        &self,
        target: NavigationPath,
        op: &'static str,
    ) -> Result<Outcome, NavigatorError> {
        let token = {
            let mut inner = self.inner.lock();
            inner.latest += 1;
            inner.pending = Some(inner.latest);
            inner.latest
        };
        tracing::debug!(op, token, depth = target.depth(), "category fetch issued");

        let result = self.source.children(target.parent_id()).await;

        let mut inner = self.inner.lock();
        if !inner.mounted {
            tracing::debug!(op, token, "discarding result after unmount");
            return Err(NavigatorError::Unmounted);
        }
        if inner.latest != token {
            tracing::debug!(op, token, latest = inner.latest, "discarding superseded result");
            return Ok(Outcome::Superseded);
        }
        inner.pending = None;

        match result {
            Ok(children) => {
                inner.path = target;
                inner.categories = children.into();
                Ok(Outcome::Applied)
            }
            Err(error) => {
                drop(inner);
                tracing::warn!(op, %error, "category fetch failed; keeping previous level");
                self.notices.api_error(&error);
                Err(NavigatorError::Fetch(error))
            }
        }
    }
}

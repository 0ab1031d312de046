//! Validated in-memory category forest.
//!
//! The backend owns the catalog; this type exists for offline catalogs (JSON
//! fixtures loaded by `zmb --catalog-file`) and tests. Construction checks the
//! forest invariants once so lookups can stay infallible.

use std::collections::{HashMap, HashSet};

use crate::entities::Category;
use crate::errors::CoreError;

/// A flat category list proven to be a forest.
///
/// Invariants held after construction:
/// - ids and slugs are unique
/// - every `parent_id` names a category in the forest
/// - following parents from any category reaches a root (no cycles)
#[derive(Debug, Clone, Default)]
pub struct CategoryForest {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryForest {
    /// Validate `categories` and build the forest. Input order is preserved as
    /// the display order of every child list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCatalog`] on duplicate ids or slugs, a
    /// dangling parent reference, or a parent cycle.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(categories.len());
        let mut slugs = HashSet::with_capacity(categories.len());

        for (position, category) in categories.iter().enumerate() {
            if index.insert(category.id.clone(), position).is_some() {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
            if !slugs.insert(category.slug.as_str()) {
                return Err(CoreError::InvalidCatalog(format!(
                    "duplicate category slug '{}'",
                    category.slug
                )));
            }
        }

        for category in &categories {
            if let Some(parent) = &category.parent_id
                && !index.contains_key(parent)
            {
                return Err(CoreError::InvalidCatalog(format!(
                    "category '{}' references unknown parent '{parent}'",
                    category.id
                )));
            }
        }

        let forest = Self { categories, index };
        forest.check_acyclic()?;
        Ok(forest)
    }

    fn check_acyclic(&self) -> Result<(), CoreError> {
        for category in &self.categories {
            let mut steps = 0usize;
            let mut cursor = category.parent_id.as_deref();
            while let Some(parent) = cursor {
                steps += 1;
                if steps > self.categories.len() {
                    return Err(CoreError::InvalidCatalog(format!(
                        "category '{}' is part of a parent cycle",
                        category.id
                    )));
                }
                cursor = self.get(parent).and_then(|p| p.parent_id.as_deref());
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&position| &self.categories[position])
    }

    /// Children of `parent` in input order; `None` lists the roots.
    #[must_use]
    pub fn children_of(&self, parent: Option<&str>) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|category| category.parent_id.as_deref() == parent)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Derive a URL-safe slug from a display name.
///
/// Lowercases ASCII letters, keeps digits and non-ASCII letters (Amharic and
/// Arabic names stay readable), and collapses everything else into single
/// hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn cat(id: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            slug: format!("{id}-slug"),
            image: None,
            parent_id: parent.map(str::to_string),
        }
    }

    fn sample() -> CategoryForest {
        CategoryForest::from_categories(vec![
            cat("a", None),
            cat("b", None),
            cat("a1", Some("a")),
            cat("a2", Some("a")),
            cat("a1x", Some("a1")),
        ])
        .unwrap()
    }

    #[test]
    fn roots_are_listed_in_input_order() {
        let ids: Vec<String> = sample().children_of(None).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn children_match_parent_reference() {
        let forest = sample();
        let ids: Vec<String> = forest
            .children_of(Some("a"))
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert!(forest.children_of(Some("b")).is_empty());
        assert!(forest.children_of(Some("missing")).is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = CategoryForest::from_categories(vec![cat("a", None), cat("a", None)]);
        assert!(matches!(err, Err(CoreError::InvalidCatalog(msg)) if msg.contains("duplicate category id")));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let mut twin = cat("b", None);
        twin.slug = "a-slug".to_string();
        let err = CategoryForest::from_categories(vec![cat("a", None), twin]);
        assert!(matches!(err, Err(CoreError::InvalidCatalog(msg)) if msg.contains("slug")));
    }

    #[test]
    fn rejects_dangling_parent() {
        let err = CategoryForest::from_categories(vec![cat("a", Some("ghost"))]);
        assert!(matches!(err, Err(CoreError::InvalidCatalog(msg)) if msg.contains("unknown parent")));
    }

    #[test]
    fn rejects_cycles() {
        let err = CategoryForest::from_categories(vec![cat("a", Some("b")), cat("b", Some("a"))]);
        assert!(matches!(err, Err(CoreError::InvalidCatalog(msg)) if msg.contains("cycle")));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Men's Shoes & Bags "), "men-s-shoes-bags");
        assert_eq!(slugify("Kids--Toys"), "kids-toys");
        assert_eq!(slugify("ልብስ ቤት"), "ልብስ-ቤት");
    }
}

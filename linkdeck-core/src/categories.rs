//! The category -> bookmarks document.

use crate::bookmark::Bookmark;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the category seeded whenever the catalog would otherwise be empty.
pub const DEFAULT_CATEGORY: &str = "General";

/// Mapping from category name to its ordered bookmarks.
///
/// Keys keep the order they were inserted in (or read from disk in), so a
/// load/save cycle leaves the document layout untouched. Within a category,
/// insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(IndexMap<String, Vec<Bookmark>>);

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding only the empty default category.
    pub fn seeded() -> Self {
        let mut categories = Self::new();
        categories.insert_empty(DEFAULT_CATEGORY);
        categories
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&[Bookmark]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<Bookmark>> {
        self.0.get_mut(name)
    }

    /// Bookmarks of `name`, creating the category if it is absent.
    pub fn entry(&mut self, name: &str) -> &mut Vec<Bookmark> {
        self.0.entry(name.to_string()).or_default()
    }

    /// Insert an empty category. Returns `false` if it already existed.
    pub fn insert_empty(&mut self, name: &str) -> bool {
        if self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), Vec::new());
        true
    }

    /// Remove a category, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Vec<Bookmark>> {
        self.0.shift_remove(name)
    }

    /// Category names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Bookmark])> {
        self.0.iter().map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Total number of bookmarks across all categories.
    pub fn bookmark_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Bookmark>)> for Categories {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Bookmark>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, url: &str) -> Bookmark {
        Bookmark::new(title, Some(url)).unwrap()
    }

    #[test]
    fn test_seeded_has_only_general() {
        let categories = Categories::seeded();
        assert_eq!(categories.names().collect::<Vec<_>>(), vec!["General"]);
        assert_eq!(categories.get("General"), Some(&[][..]));
    }

    #[test]
    fn test_insert_empty_rejects_existing() {
        let mut categories = Categories::seeded();
        assert!(!categories.insert_empty("General"));
        assert!(categories.insert_empty("Work"));
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_entry_creates_missing_category() {
        let mut categories = Categories::new();
        categories.entry("Reading").push(link("Docs", "docs.rs"));
        assert_eq!(categories.get("Reading").map(<[Bookmark]>::len), Some(1));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut categories = Categories::new();
        for name in ["c", "a", "b"] {
            categories.insert_empty(name);
        }
        categories.remove("a");
        assert_eq!(categories.names().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_json_shape() {
        let mut categories = Categories::seeded();
        categories.entry("General").push(link("Docs", "example.com"));
        categories.entry("Notes").push(Bookmark::note("Dune").unwrap());

        let json = serde_json::to_string(&categories).unwrap();
        assert_eq!(
            json,
            r#"{"General":[{"title":"Docs","url":"https://example.com"}],"Notes":[{"title":"Dune"}]}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let categories: Categories =
            serde_json::from_str(r#"{"Zeta":[],"Alpha":[],"Mid":[{"title":"x"}]}"#).unwrap();
        assert_eq!(
            categories.names().collect::<Vec<_>>(),
            vec!["Zeta", "Alpha", "Mid"]
        );
        assert_eq!(categories.bookmark_count(), 1);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Categories>("[]").is_err());
        assert!(serde_json::from_str::<Categories>(r#"{"General":[{"url":"x"}]}"#).is_err());
    }
}

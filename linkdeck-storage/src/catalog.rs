//! The in-memory working copy of the bookmark document.
//!
//! Every mutation is applied to memory first and then flushed to the store
//! as a full document. A failed flush is returned to the caller but the
//! in-memory change is kept, so memory and disk disagree until the next
//! successful save.

use crate::traits::{CatalogStore, Loaded};
use linkdeck_core::{
    validate_category_name, Bookmark, CatalogError, CatalogResult, Categories, NotFoundError,
    StoreError,
};
use tracing::{info, warn};

/// Catalog returned by [`Catalog::open`] plus anything worth telling the user.
#[derive(Debug)]
pub struct Opened<S: CatalogStore> {
    pub catalog: Catalog<S>,
    /// Load problem (malformed or unreadable file) and/or a failed seed save.
    pub problems: Vec<StoreError>,
}

/// A removed category and what happened to the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedCategory {
    pub name: String,
    pub bookmarks: Vec<Bookmark>,
    /// Whether the default category had to be recreated.
    pub reseeded: bool,
}

/// Owned catalog bound to its store.
#[derive(Debug)]
pub struct Catalog<S: CatalogStore> {
    store: S,
    categories: Categories,
}

impl<S: CatalogStore> Catalog<S> {
    /// Load the catalog, seeding the default category when nothing usable
    /// was found. The seeded document is saved right away.
    pub fn open(store: S) -> Opened<S> {
        let Loaded {
            categories,
            problem,
        } = store.load();
        let mut problems: Vec<StoreError> = problem.into_iter().collect();

        let mut catalog = Self { store, categories };
        if catalog.categories.is_empty() {
            info!("Seeding default category");
            catalog.categories = Categories::seeded();
            if let Err(err) = catalog.persist() {
                problems.push(err);
            }
        }

        Opened { catalog, problems }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Category names in document order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.names().collect()
    }

    /// Category names in display order (alphabetical by code point).
    pub fn sorted_category_names(&self) -> Vec<&str> {
        let mut names = self.category_names();
        names.sort_unstable();
        names
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    pub fn bookmarks(&self, category: &str) -> Option<&[Bookmark]> {
        self.categories.get(category)
    }

    /// `true` when the category exists and has no bookmarks.
    pub fn is_category_empty(&self, category: &str) -> bool {
        self.bookmarks(category).is_some_and(<[Bookmark]>::is_empty)
    }

    /// Append a bookmark to `category`, creating the category if needed.
    pub fn add_bookmark(
        &mut self,
        category: &str,
        title: &str,
        url: Option<&str>,
    ) -> CatalogResult<()> {
        let bookmark = Bookmark::new(title, url)?;
        let key = if self.categories.contains(category) {
            category.to_string()
        } else {
            validate_category_name(category)?
        };

        info!(category = %key, title = %bookmark.title, note = bookmark.is_note(), "Adding bookmark");
        self.categories.entry(&key).push(bookmark);
        self.persist()?;
        Ok(())
    }

    /// Remove and return the bookmark at `index`; later entries shift down.
    ///
    /// An emptied category is left in place. Use [`is_category_empty`] to
    /// decide whether to offer removing it.
    ///
    /// [`is_category_empty`]: Catalog::is_category_empty
    pub fn delete_bookmark(&mut self, category: &str, index: usize) -> CatalogResult<Bookmark> {
        self.lookup(category, index)?;
        let items = self
            .categories
            .get_mut(category)
            .ok_or_else(|| category_not_found(category))?;
        let removed = items.remove(index);

        info!(category, index, title = %removed.title, "Deleted bookmark");
        self.persist()?;
        Ok(removed)
    }

    /// URL of the bookmark at `index`, for handing to the system opener.
    ///
    /// A missing or blank URL is [`CatalogError::NoUrl`].
    pub fn open_bookmark(&self, category: &str, index: usize) -> CatalogResult<String> {
        let bookmark = self.lookup(category, index)?;
        bookmark.link().map(str::to_string).ok_or_else(|| CatalogError::NoUrl {
            category: category.to_string(),
            index,
        })
    }

    /// Create an empty category. Returns the stored (trimmed) name.
    pub fn create_category(&mut self, name: &str) -> CatalogResult<String> {
        let name = validate_category_name(name)?;
        if !self.categories.insert_empty(&name) {
            return Err(CatalogError::Duplicate { name });
        }

        info!(category = %name, "Created category");
        self.persist()?;
        Ok(name)
    }

    /// Remove a category and all of its bookmarks.
    ///
    /// Removing the last category recreates the empty default category so
    /// the catalog is never empty.
    pub fn delete_category(&mut self, name: &str) -> CatalogResult<DeletedCategory> {
        let bookmarks = self
            .categories
            .remove(name)
            .ok_or_else(|| category_not_found(name))?;

        let reseeded = self.categories.is_empty();
        if reseeded {
            self.categories = Categories::seeded();
        }

        info!(category = name, removed = bookmarks.len(), reseeded, "Deleted category");
        self.persist()?;
        Ok(DeletedCategory {
            name: name.to_string(),
            bookmarks,
            reseeded,
        })
    }

    fn lookup(&self, category: &str, index: usize) -> Result<&Bookmark, NotFoundError> {
        let items = self
            .categories
            .get(category)
            .ok_or_else(|| NotFoundError::Category {
                name: category.to_string(),
            })?;
        items.get(index).ok_or_else(|| NotFoundError::Bookmark {
            category: category.to_string(),
            index,
            len: items.len(),
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.categories).map_err(|err| {
            warn!(error = %err, "Saving bookmarks failed; in-memory changes kept");
            err
        })
    }
}

fn category_not_found(name: &str) -> CatalogError {
    NotFoundError::Category {
        name: name.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockStore;
    use linkdeck_core::{ValidationError, DEFAULT_CATEGORY};

    fn open_empty() -> (Catalog<MockStore>, MockStore) {
        let store = MockStore::new();
        let Opened { catalog, problems } = Catalog::open(store.clone());
        assert!(problems.is_empty());
        (catalog, store)
    }

    fn disk_full() -> StoreError {
        StoreError::Io {
            path: "categories.json".into(),
            reason: "No space left on device".to_string(),
        }
    }

    #[test]
    fn test_open_missing_seeds_and_saves_general() {
        let (catalog, store) = open_empty();
        assert_eq!(catalog.category_names(), vec![DEFAULT_CATEGORY]);
        assert_eq!(store.document(), Some(Categories::seeded()));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_open_existing_does_not_save() {
        let mut categories = Categories::seeded();
        categories.insert_empty("Work");
        let store = MockStore::with_document(categories.clone());

        let opened = Catalog::open(store.clone());
        assert_eq!(opened.catalog.categories(), &categories);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_open_empty_object_is_seeded() {
        let store = MockStore::with_document(Categories::new());
        let opened = Catalog::open(store);
        assert_eq!(opened.catalog.category_names(), vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn test_open_malformed_reports_and_seeds() {
        let problem = StoreError::Parse {
            path: "categories.json".into(),
            reason: "EOF while parsing".to_string(),
        };
        let opened = Catalog::open(MockStore::with_load_problem(problem.clone()));
        assert_eq!(opened.problems, vec![problem]);
        assert_eq!(opened.catalog.category_names(), vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn test_open_seed_save_failure_is_reported() {
        let store = MockStore::new();
        store.fail_saves(Some(disk_full()));
        let opened = Catalog::open(store);
        assert_eq!(opened.problems, vec![disk_full()]);
        assert_eq!(opened.catalog.category_names(), vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn test_add_then_delete_example_scenario() {
        let (mut catalog, store) = open_empty();

        catalog
            .add_bookmark("General", "Docs", Some("example.com"))
            .unwrap();
        assert_eq!(
            catalog.bookmarks("General").unwrap(),
            &[Bookmark {
                title: "Docs".to_string(),
                url: Some("https://example.com".to_string()),
            }]
        );

        let removed = catalog.delete_bookmark("General", 0).unwrap();
        assert_eq!(removed.title, "Docs");
        assert_eq!(catalog.bookmarks("General"), Some(&[][..]));
        assert!(catalog.is_category_empty("General"));
        assert_eq!(store.document(), Some(Categories::seeded()));
    }

    #[test]
    fn test_add_appends_last() {
        let (mut catalog, _) = open_empty();
        catalog.add_bookmark("General", "One", None).unwrap();
        catalog.add_bookmark("General", "Two", Some("two.example")).unwrap();

        let items = catalog.bookmarks("General").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "Two");
    }

    #[test]
    fn test_add_empty_title_rejected_without_save() {
        let (mut catalog, store) = open_empty();
        let err = catalog.add_bookmark("General", "  ", Some("x.y")).unwrap_err();
        assert_eq!(err, CatalogError::Validation(ValidationError::EmptyTitle));
        assert_eq!(store.save_count(), 1);
        assert!(catalog.is_category_empty("General"));
    }

    #[test]
    fn test_add_creates_missing_category_trimmed() {
        let (mut catalog, _) = open_empty();
        catalog.add_bookmark("  Reading ", "Dune", None).unwrap();
        assert!(catalog.contains_category("Reading"));
        assert_eq!(catalog.bookmarks("Reading").map(<[Bookmark]>::len), Some(1));
    }

    #[test]
    fn test_add_to_blank_missing_category_rejected() {
        let (mut catalog, _) = open_empty();
        let err = catalog.add_bookmark("   ", "Dune", None).unwrap_err();
        assert_eq!(err, CatalogError::Validation(ValidationError::EmptyName));
    }

    #[test]
    fn test_delete_out_of_range() {
        let (mut catalog, _) = open_empty();
        catalog.add_bookmark("General", "One", None).unwrap();
        let err = catalog.delete_bookmark("General", 1).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound(NotFoundError::Bookmark {
                category: "General".to_string(),
                index: 1,
                len: 1,
            })
        );
        assert_eq!(catalog.bookmarks("General").map(<[Bookmark]>::len), Some(1));
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let (mut catalog, _) = open_empty();
        for title in ["a", "b", "c"] {
            catalog.add_bookmark("General", title, None).unwrap();
        }
        catalog.delete_bookmark("General", 0).unwrap();
        let titles: Vec<_> = catalog
            .bookmarks("General")
            .unwrap()
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_delete_from_unknown_category() {
        let (mut catalog, _) = open_empty();
        let err = catalog.delete_bookmark("Nope", 0).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NotFound(NotFoundError::Category { .. })
        ));
    }

    #[test]
    fn test_open_bookmark_returns_url_or_no_url() {
        let (mut catalog, _) = open_empty();
        catalog.add_bookmark("General", "Docs", Some("docs.rs")).unwrap();
        catalog.add_bookmark("General", "Dune", None).unwrap();

        assert_eq!(catalog.open_bookmark("General", 0).unwrap(), "https://docs.rs");
        assert_eq!(
            catalog.open_bookmark("General", 1).unwrap_err(),
            CatalogError::NoUrl {
                category: "General".to_string(),
                index: 1,
            }
        );
        assert!(matches!(
            catalog.open_bookmark("General", 9),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_create_category() {
        let (mut catalog, store) = open_empty();
        let name = catalog.create_category("  Work  ").unwrap();
        assert_eq!(name, "Work");
        assert!(catalog.is_category_empty("Work"));
        assert!(store.document().unwrap().contains("Work"));
    }

    #[test]
    fn test_create_duplicate_general_leaves_catalog_unchanged() {
        let (mut catalog, store) = open_empty();
        catalog.add_bookmark("General", "Docs", None).unwrap();
        let before = catalog.categories().clone();
        let saves = store.save_count();

        let err = catalog.create_category("General").unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate {
                name: "General".to_string()
            }
        );
        assert_eq!(catalog.categories(), &before);
        assert_eq!(store.save_count(), saves);
    }

    #[test]
    fn test_create_category_is_case_sensitive() {
        let (mut catalog, _) = open_empty();
        assert!(catalog.create_category("general").is_ok());
        assert_eq!(catalog.categories().len(), 2);
    }

    #[test]
    fn test_create_blank_category_rejected() {
        let (mut catalog, _) = open_empty();
        assert_eq!(
            catalog.create_category(" \t").unwrap_err(),
            CatalogError::Validation(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_delete_category_removes_bookmarks() {
        let (mut catalog, _) = open_empty();
        catalog.create_category("Work").unwrap();
        catalog.add_bookmark("Work", "Jira", Some("jira.example")).unwrap();

        let deleted = catalog.delete_category("Work").unwrap();
        assert_eq!(deleted.bookmarks.len(), 1);
        assert!(!deleted.reseeded);
        assert!(!catalog.contains_category("Work"));
    }

    #[test]
    fn test_delete_last_category_reseeds_general() {
        let (mut catalog, store) = open_empty();
        catalog.add_bookmark("General", "Docs", None).unwrap();

        let deleted = catalog.delete_category("General").unwrap();
        assert!(deleted.reseeded);
        assert_eq!(catalog.categories(), &Categories::seeded());
        assert_eq!(store.document(), Some(Categories::seeded()));
    }

    #[test]
    fn test_delete_unknown_category() {
        let (mut catalog, _) = open_empty();
        assert!(matches!(
            catalog.delete_category("Ghost"),
            Err(CatalogError::NotFound(NotFoundError::Category { .. }))
        ));
    }

    #[test]
    fn test_save_failure_keeps_memory_change() {
        let (mut catalog, store) = open_empty();
        store.fail_saves(Some(disk_full()));

        let err = catalog.add_bookmark("General", "Docs", None).unwrap_err();
        assert_eq!(err, CatalogError::Store(disk_full()));
        assert_eq!(catalog.bookmarks("General").map(<[Bookmark]>::len), Some(1));
        assert_eq!(store.document(), Some(Categories::seeded()));

        store.fail_saves(None);
        catalog.create_category("Work").unwrap();
        let saved = store.document().unwrap();
        assert_eq!(saved.get("General").map(<[Bookmark]>::len), Some(1));
    }

    #[test]
    fn test_sorted_names_vs_document_order() {
        let (mut catalog, _) = open_empty();
        catalog.create_category("Zed").unwrap();
        catalog.create_category("Alpha").unwrap();
        assert_eq!(catalog.category_names(), vec!["General", "Zed", "Alpha"]);
        assert_eq!(
            catalog.sorted_category_names(),
            vec!["Alpha", "General", "Zed"]
        );
    }
}

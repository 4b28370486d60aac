use linkdeck_storage::{Catalog, CatalogStore, JsonFileStore, MockStore, Opened, WriteMode};
use linkdeck_test_utils::assertions::{assert_never_empty, assert_not_found, assert_urls_normalized};
use linkdeck_test_utils::fixtures::sample_categories;
use linkdeck_test_utils::generators::{
    arb_bookmark, arb_categories, arb_category_name, arb_title, arb_url_input,
};
use linkdeck_core::UNTITLED;
use linkdeck_test_utils::{Bookmark, CatalogError, Categories, StoreError, DEFAULT_CATEGORY};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("categories.json"))
}

#[test]
fn fresh_start_writes_general_document() {
    let dir = TempDir::new().unwrap();
    let Opened { catalog, problems } = Catalog::open(file_store(&dir));
    assert!(problems.is_empty());
    assert_eq!(catalog.category_names(), vec![DEFAULT_CATEGORY]);

    let written = fs::read_to_string(dir.path().join("categories.json")).unwrap();
    assert_eq!(written, "{\n    \"General\": []\n}");
}

#[test]
fn malformed_file_degrades_to_general() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("categories.json"), "{\"General\": [").unwrap();

    let Opened { catalog, problems } = Catalog::open(file_store(&dir));
    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0], StoreError::Parse { .. }));
    assert_eq!(catalog.categories(), &Categories::seeded());
}

#[test]
fn example_scenario_against_file() {
    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::open(file_store(&dir)).catalog;

    catalog
        .add_bookmark("General", "Docs", Some("example.com"))
        .unwrap();
    let reloaded = file_store(&dir).load().categories;
    assert_eq!(
        reloaded.get("General").unwrap(),
        &[Bookmark {
            title: "Docs".to_string(),
            url: Some("https://example.com".to_string()),
        }]
    );

    catalog.delete_bookmark("General", 0).unwrap();
    let reloaded = file_store(&dir).load().categories;
    assert_eq!(reloaded, Categories::seeded());
}

#[test]
fn deleting_last_bookmark_keeps_category() {
    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::open(file_store(&dir)).catalog;
    catalog.create_category("Work").unwrap();
    catalog.add_bookmark("Work", "Jira", Some("jira.example")).unwrap();
    catalog.delete_bookmark("Work", 0).unwrap();

    assert!(catalog.is_category_empty("Work"));
    let reloaded = file_store(&dir).load().categories;
    assert_eq!(reloaded.get("Work"), Some(&[][..]));
}

#[test]
fn existing_document_loads_in_file_order() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    store.save(&sample_categories()).unwrap();

    let catalog = Catalog::open(file_store(&dir)).catalog;
    assert_eq!(catalog.category_names(), vec!["General", "Đọc sau", "Games"]);
    assert_eq!(catalog.categories(), &sample_categories());
}

#[test]
fn atomic_store_behaves_like_overwrite() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir).with_write_mode(WriteMode::Atomic);
    let mut catalog = Catalog::open(store).catalog;
    catalog.add_bookmark("General", "Docs", Some("docs.rs")).unwrap();

    let reloaded = file_store(&dir).load().categories;
    assert_eq!(reloaded.get("General").map(<[Bookmark]>::len), Some(1));
}

#[test]
fn open_on_urlless_entry_is_no_url() {
    let mut catalog = Catalog::open(MockStore::new()).catalog;
    catalog.add_bookmark("General", "Dune", None).unwrap();
    assert!(matches!(
        catalog.open_bookmark("General", 0),
        Err(CatalogError::NoUrl { .. })
    ));
    assert_not_found(&catalog.open_bookmark("General", 1));
}

#[test]
fn stored_blank_url_opens_as_no_url() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("categories.json"),
        r#"{"General":[{"title":"x","url":""}]}"#,
    )
    .unwrap();

    let Opened { catalog, problems } = Catalog::open(file_store(&dir));
    assert!(problems.is_empty());
    assert!(matches!(
        catalog.open_bookmark("General", 0),
        Err(CatalogError::NoUrl { index: 0, .. })
    ));
}

#[test]
fn untitled_entry_keeps_the_rest_of_the_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("categories.json");
    fs::write(
        &path,
        r#"{"Work":[{"title":"Jira","url":"https://jira.example"},{"url":"https://no-title"}]}"#,
    )
    .unwrap();

    let Opened { catalog, problems } = Catalog::open(file_store(&dir));
    assert!(problems.is_empty());
    let work = catalog.bookmarks("Work").unwrap();
    assert_eq!(work.len(), 2);
    assert_eq!(work[0].title, "Jira");
    assert_eq!(work[1].title, UNTITLED);

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("Jira"));
    assert!(!catalog.contains_category(DEFAULT_CATEGORY));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// addBookmark followed by a fresh load yields the normalized entry last.
    #[test]
    fn prop_add_then_reload_has_entry_last(
        category in arb_category_name(),
        title in arb_title(),
        url in arb_url_input(),
    ) {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::open(file_store(&dir)).catalog;
        catalog.add_bookmark(&category, &title, url.as_deref()).unwrap();

        let expected = Bookmark::new(&title, url.as_deref()).unwrap();
        let reloaded = file_store(&dir).load();
        prop_assert!(reloaded.problem.is_none());
        let items = reloaded.categories.get(&category).unwrap();
        prop_assert_eq!(items.last(), Some(&expected));
    }

    /// save then load is the identity, including non-ASCII text.
    #[test]
    fn prop_save_load_round_trip(categories in arb_categories()) {
        let dir = TempDir::new().unwrap();
        let store = file_store(&dir);
        store.save(&categories).unwrap();

        let loaded = store.load();
        prop_assert!(loaded.problem.is_none());
        prop_assert_eq!(loaded.categories, categories);
    }

    /// delete then add restores the length, not necessarily the content.
    #[test]
    fn prop_delete_then_add_restores_length(
        items in prop::collection::vec(arb_bookmark(), 1..8),
        pick in any::<prop::sample::Index>(),
        replacement in arb_bookmark(),
    ) {
        let document: Categories = vec![(DEFAULT_CATEGORY.to_string(), items.clone())]
            .into_iter()
            .collect();
        let mut catalog = Catalog::open(MockStore::with_document(document)).catalog;

        let index = pick.index(items.len());
        let removed = catalog.delete_bookmark(DEFAULT_CATEGORY, index).unwrap();
        prop_assert_eq!(&removed, &items[index]);

        catalog
            .add_bookmark(DEFAULT_CATEGORY, &replacement.title, replacement.url.as_deref())
            .unwrap();
        let after = catalog.bookmarks(DEFAULT_CATEGORY).unwrap();
        prop_assert_eq!(after.len(), items.len());
        prop_assert_eq!(after.last(), Some(&replacement));
    }

    /// No sequence of category deletions leaves the catalog empty.
    #[test]
    fn prop_catalog_never_empty(categories in arb_categories(), rounds in 1usize..10) {
        let store = MockStore::with_document(categories);
        let mut catalog = Catalog::open(store.clone()).catalog;

        for _ in 0..rounds {
            let first = catalog.category_names()[0].to_string();
            catalog.delete_category(&first).unwrap();
            assert_never_empty(catalog.categories());
            assert_never_empty(&store.document().unwrap());
        }
        assert_urls_normalized(catalog.categories());
    }
}

//! linkdeck Test Utilities
//!
//! Shared test infrastructure for the workspace:
//! - Proptest generators for bookmarks and category documents
//! - Fixtures for common scenarios
//! - Assertions for catalog invariants

pub use linkdeck_core::{
    Bookmark, CatalogError, CatalogResult, Categories, NotFoundError, StoreError,
    ValidationError, DEFAULT_CATEGORY,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for bookmark data.

    use super::*;
    use proptest::prelude::*;

    /// Titles with at least one visible character, mixing ASCII, Vietnamese
    /// and CJK text.
    pub fn arb_title() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9][a-zA-Z0-9 _.-]{0,30}",
            "[àáảãạăằắđêếệôơưữ][a-zàáảãạđêôơư ]{0,20}",
            "[日本語漢字書籍][日本語漢字書籍 ]{0,10}",
        ]
    }

    /// Category names: non-empty and already trimmed.
    pub fn arb_category_name() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Za-z][A-Za-z0-9]{0,12}( [A-Za-z0-9]{1,8})?",
            "[ĐđÂâ][a-zđâêô]{1,10}",
        ]
    }

    /// A host with no scheme, such as the user would type.
    pub fn arb_bare_url() -> impl Strategy<Value = String> {
        "[a-z]{1,12}\\.(com|org|dev|vn)(/[a-z0-9]{1,8}){0,2}"
    }

    /// URL input as typed into the form: bare, with a scheme, or blank.
    pub fn arb_url_input() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("   ".to_string())),
            arb_bare_url().prop_map(Some),
            arb_bare_url().prop_map(|u| Some(format!("http://{u}"))),
            arb_bare_url().prop_map(|u| Some(format!("https://{u}"))),
        ]
    }

    /// A normalized bookmark, as stored.
    pub fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
        (arb_title(), arb_url_input()).prop_map(|(title, url)| {
            Bookmark::new(&title, url.as_deref()).unwrap_or(Bookmark { title, url: None })
        })
    }

    /// A non-empty category document.
    pub fn arb_categories() -> impl Strategy<Value = Categories> {
        prop::collection::vec(
            (arb_category_name(), prop::collection::vec(arb_bookmark(), 0..6)),
            1..6,
        )
        .prop_map(|entries| {
            let mut categories: Categories = entries.into_iter().collect();
            if categories.is_empty() {
                categories = Categories::seeded();
            }
            categories
        })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built documents for common scenarios.

    use super::*;

    pub fn link(title: &str, url: &str) -> Bookmark {
        Bookmark {
            title: title.to_string(),
            url: Some(url.to_string()),
        }
    }

    pub fn note(title: &str) -> Bookmark {
        Bookmark {
            title: title.to_string(),
            url: None,
        }
    }

    /// Three categories with links, notes and non-ASCII titles.
    pub fn sample_categories() -> Categories {
        vec![
            (
                "General".to_string(),
                vec![
                    link("Docs", "https://example.com"),
                    link("Rust", "https://www.rust-lang.org"),
                ],
            ),
            (
                "Đọc sau".to_string(),
                vec![note("Trăm năm cô đơn"), link("Báo", "https://vnexpress.net")],
            ),
            ("Games".to_string(), vec![note("Cyberpunk 2077")]),
        ]
        .into_iter()
        .collect()
    }

    /// The sample document as pretty-printed JSON text.
    pub fn sample_document_json() -> String {
        serde_json::to_string_pretty(&sample_categories()).unwrap_or_default()
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions for catalog invariants.

    use super::*;

    /// Assert the document has at least one category.
    #[track_caller]
    pub fn assert_never_empty(categories: &Categories) {
        assert!(
            !categories.is_empty(),
            "Catalog must always hold at least one category"
        );
    }

    /// Assert every stored URL carries an explicit scheme.
    #[track_caller]
    pub fn assert_urls_normalized(categories: &Categories) {
        for (name, items) in categories.iter() {
            for bookmark in items {
                if let Some(url) = &bookmark.url {
                    assert!(
                        linkdeck_core::has_explicit_scheme(url),
                        "Bookmark '{}' in '{}' has unnormalized URL {}",
                        bookmark.title,
                        name,
                        url
                    );
                }
            }
        }
    }

    /// Assert that a result is a validation error of the given kind.
    #[track_caller]
    pub fn assert_validation<T: std::fmt::Debug>(
        result: &CatalogResult<T>,
        expected: ValidationError,
    ) {
        match result {
            Err(CatalogError::Validation(err)) => assert_eq!(*err, expected),
            other => panic!("Expected {:?}, got: {:?}", expected, other),
        }
    }

    /// Assert that a result is a not-found error.
    #[track_caller]
    pub fn assert_not_found<T: std::fmt::Debug>(result: &CatalogResult<T>) {
        match result {
            Err(CatalogError::NotFound(_)) => {}
            other => panic!("Expected NotFound error, got: {:?}", other),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

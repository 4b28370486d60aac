//! The persistence contract behind a [`Catalog`](crate::Catalog).

use linkdeck_core::{Categories, StoreError};
use serde::{Deserialize, Serialize};

/// Outcome of reading the backing document.
///
/// Loading never fails outright. A missing document yields an empty
/// [`Categories`] with no problem; an unreadable or malformed one yields an
/// empty [`Categories`] together with the error, which the caller reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loaded {
    pub categories: Categories,
    pub problem: Option<StoreError>,
}

impl Loaded {
    pub fn found(categories: Categories) -> Self {
        Self {
            categories,
            problem: None,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn failed(problem: StoreError) -> Self {
        Self {
            categories: Categories::new(),
            problem: Some(problem),
        }
    }
}

/// Storage for the whole category document.
///
/// Implementations always read and write the full document; there is no
/// incremental update.
pub trait CatalogStore {
    /// Read the document, failing soft.
    fn load(&self) -> Loaded;

    /// Replace the stored document with `categories`.
    fn save(&self, categories: &Categories) -> Result<(), StoreError>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn load(&self) -> Loaded {
        (**self).load()
    }

    fn save(&self, categories: &Categories) -> Result<(), StoreError> {
        (**self).save(categories)
    }
}

impl<T: CatalogStore + ?Sized> CatalogStore for Box<T> {
    fn load(&self) -> Loaded {
        (**self).load()
    }

    fn save(&self, categories: &Categories) -> Result<(), StoreError> {
        (**self).save(categories)
    }
}

/// How a file-backed store replaces the document on save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Truncate and rewrite the target in place.
    #[default]
    Overwrite,
    /// Write a sibling temp file, sync it, then rename it over the target.
    Atomic,
}

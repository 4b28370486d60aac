//! In-memory store for tests.

use crate::traits::{CatalogStore, Loaded};
use linkdeck_core::{Categories, StoreError};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockState {
    document: Option<Categories>,
    load_problem: Option<StoreError>,
    save_failure: Option<StoreError>,
    save_count: usize,
}

/// In-memory mock store.
///
/// Clones share the same document, so a test can keep a handle after moving
/// the store into a catalog. Load problems and save failures can be injected.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockState>>,
}

impl MockStore {
    /// Store with no document, as if the file did not exist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `categories`.
    pub fn with_document(categories: Categories) -> Self {
        let store = Self::new();
        store.lock().document = Some(categories);
        store
    }

    /// Store whose next loads report `problem` and return nothing.
    pub fn with_load_problem(problem: StoreError) -> Self {
        let store = Self::new();
        store.lock().load_problem = Some(problem);
        store
    }

    /// Make every following save fail with `error`, or succeed again with `None`.
    pub fn fail_saves(&self, error: Option<StoreError>) {
        self.lock().save_failure = error;
    }

    /// The last successfully saved document.
    pub fn document(&self) -> Option<Categories> {
        self.lock().document.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CatalogStore for MockStore {
    fn load(&self) -> Loaded {
        let state = self.lock();
        if let Some(problem) = &state.load_problem {
            return Loaded::failed(problem.clone());
        }
        match &state.document {
            Some(categories) => Loaded::found(categories.clone()),
            None => Loaded::missing(),
        }
    }

    fn save(&self, categories: &Categories) -> Result<(), StoreError> {
        let mut state = self.lock();
        if let Some(error) = &state.save_failure {
            return Err(error.clone());
        }
        state.document = Some(categories.clone());
        state.load_problem = None;
        state.save_count += 1;
        Ok(())
    }
}

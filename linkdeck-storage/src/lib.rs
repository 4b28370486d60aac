//! linkdeck Storage - Catalog Store and Operations
//!
//! Defines the [`CatalogStore`] persistence contract, the JSON file store
//! used by the application, an in-memory mock, and the [`Catalog`] working
//! copy whose operations mutate and then persist.

pub mod catalog;
pub mod json_file;
pub mod mock;
pub mod traits;

pub use catalog::{Catalog, DeletedCategory, Opened};
pub use json_file::{render_document, JsonFileStore};
pub use mock::MockStore;
pub use traits::{CatalogStore, Loaded, WriteMode};

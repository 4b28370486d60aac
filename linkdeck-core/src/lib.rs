//! linkdeck Core - Bookmark Data Types
//!
//! Pure data structures, validation rules and the error taxonomy shared by
//! every other crate. Nothing in here touches the file system.

pub mod bookmark;
pub mod categories;
pub mod error;
pub mod url;

pub use bookmark::{validate_category_name, validate_title, Bookmark, UNTITLED};
pub use categories::{Categories, DEFAULT_CATEGORY};
pub use error::{CatalogError, CatalogResult, NotFoundError, StoreError, ValidationError};
pub use url::{has_explicit_scheme, normalize_url};

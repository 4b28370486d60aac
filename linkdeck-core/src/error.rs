//! Error types for linkdeck operations

use std::path::PathBuf;
use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bookmark title must not be empty")]
    EmptyTitle,

    #[error("Category name must not be empty")]
    EmptyName,
}

/// Lookup errors for categories and bookmark rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Category not found: {name}")]
    Category { name: String },

    #[error("No bookmark at index {index} in '{category}' (it has {len})")]
    Bookmark {
        category: String,
        index: usize,
        len: usize,
    },
}

/// Persistence errors raised by a catalog store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("I/O error on {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    #[error("Could not load bookmarks from {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Serialization failed: {reason}")]
    Serialize { reason: String },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Master error type for catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Category '{name}' already exists")]
    Duplicate { name: String },

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Bookmark {index} in '{category}' does not have an associated URL")]
    NoUrl { category: String, index: usize },

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// TESTS
// =============================================================================

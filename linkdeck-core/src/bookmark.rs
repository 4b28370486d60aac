//! Bookmark records and input validation.

use crate::error::ValidationError;
use crate::url::normalize_url;
use serde::{Deserialize, Serialize};

/// Title given to stored entries that have none.
pub const UNTITLED: &str = "No Title";

/// A named link, or a plain note when `url` is absent or blank.
///
/// Reading is lenient: an entry without a title loads as [`UNTITLED`]
/// instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Bookmark {
    /// Build a bookmark from raw user input.
    ///
    /// The title is trimmed and must not be empty. The URL goes through
    /// [`normalize_url`], so a blank URL produces a note-only bookmark.
    pub fn new(title: &str, url: Option<&str>) -> Result<Self, ValidationError> {
        let title = validate_title(title)?;
        Ok(Self {
            title,
            url: url.and_then(normalize_url),
        })
    }

    /// Note-only bookmark with no link.
    pub fn note(title: &str) -> Result<Self, ValidationError> {
        Self::new(title, None)
    }

    /// The URL to open, if any. A stored blank URL counts as none.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }

    /// Whether this entry has no URL to open.
    pub fn is_note(&self) -> bool {
        self.link().is_none()
    }
}

fn untitled() -> String {
    UNTITLED.to_string()
}

/// Trim a bookmark title, rejecting blank input.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Trim a category name, rejecting blank input.
pub fn validate_category_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

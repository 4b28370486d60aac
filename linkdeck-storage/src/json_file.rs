//! JSON document store on the local file system.

use crate::traits::{CatalogStore, Loaded, WriteMode};
use linkdeck_core::{Categories, StoreError};
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Indentation used for the persisted document.
const INDENT: &[u8] = b"    ";

/// Store backed by a single pretty-printed JSON file.
///
/// The file is exclusively owned by one running instance; there is no
/// locking, so concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    write_mode: WriteMode,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomic(&self, contents: &[u8]) -> Result<(), StoreError> {
        let temp_path = self.temp_path();
        let mut file =
            fs::File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, &e))?;
        file.write_all(contents)
            .map_err(|e| StoreError::io(&temp_path, &e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, &e))?;
        drop(file);
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, &e))?;
        Ok(())
    }
}

/// Render `categories` the way the document is stored on disk.
///
/// Four-space indentation; non-ASCII text is written literally.
pub fn render_document(categories: &Categories) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    categories
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Serialize {
            reason: e.to_string(),
        })?;
    Ok(buf)
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Loaded {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No bookmark file yet");
                return Loaded::missing();
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), error = %err, "Bookmark file is not UTF-8");
                return Loaded::failed(StoreError::Parse {
                    path: self.path.clone(),
                    reason: err.to_string(),
                });
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Bookmark file unreadable");
                return Loaded::failed(StoreError::io(&self.path, &err));
            }
        };

        match serde_json::from_str::<Categories>(&contents) {
            Ok(categories) => {
                info!(
                    path = %self.path.display(),
                    categories = categories.len(),
                    bookmarks = categories.bookmark_count(),
                    "Loaded bookmarks"
                );
                Loaded::found(categories)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Invalid JSON format in bookmark file");
                Loaded::failed(StoreError::parse(&self.path, &err))
            }
        }
    }

    fn save(&self, categories: &Categories) -> Result<(), StoreError> {
        let contents = render_document(categories)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, &e))?;
        }
        match self.write_mode {
            WriteMode::Overwrite => {
                fs::write(&self.path, &contents).map_err(|e| StoreError::io(&self.path, &e))?
            }
            WriteMode::Atomic => self.write_atomic(&contents)?,
        }
        debug!(
            path = %self.path.display(),
            mode = ?self.write_mode,
            categories = categories.len(),
            bytes = contents.len(),
            "Saved bookmarks"
        );
        Ok(())
    }
}

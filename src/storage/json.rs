//! JSON store documents.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "groups": [
//!     { "name": "Fruits", "items": ["apple", "banana", "orange", "blueberry"] }
//!   ]
//! }
//! ```

use crate::domain::error::{ListboardError, Result};
use crate::domain::{CollectionStore, Group};
use crate::storage::source::StoreSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Only document version understood by this crate.
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Top-level structure of a store document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    /// Version of the document format.
    version: u32,

    #[serde(default)]
    groups: Vec<Group>,
}

/// Parses a store document.
///
/// # Errors
///
/// - [`ListboardError::Storage`] for malformed JSON or an unsupported `version`
/// - [`ListboardError::Config`] when the document lists no groups
///
/// # Examples
///
/// ```
/// use listboard::storage::parse_store;
///
/// let store = parse_store(r#"{"version": 1, "groups": [{"name": "A", "items": ["x"]}]}"#)?;
/// assert_eq!(store.len(), 1);
/// # Ok::<(), listboard::ListboardError>(())
/// ```
pub fn parse_store(contents: &str) -> Result<CollectionStore> {
    let document: StoreDocument = serde_json::from_str(contents)
        .map_err(|e| ListboardError::Storage(format!("failed to parse JSON: {e}")))?;

    if document.version != STORE_FORMAT_VERSION {
        return Err(ListboardError::Storage(format!(
            "unsupported store version {} (expected {STORE_FORMAT_VERSION})",
            document.version
        )));
    }

    tracing::debug!(
        version = document.version,
        groups = document.groups.len(),
        "parsed store document"
    );

    CollectionStore::new(document.groups)
}

/// Reads and parses a store document from disk.
///
/// # Errors
///
/// Returns [`ListboardError::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_store`].
pub fn load_store(path: &Path) -> Result<CollectionStore> {
    tracing::debug!(path = ?path, "loading store document");
    let contents = std::fs::read_to_string(path)?;
    parse_store(&contents)
}

/// JSON file store source.
///
/// ```no_run
/// use listboard::storage::{JsonStore, StoreSource};
///
/// let store = JsonStore::new("/tmp/groups.json").load()?;
/// # Ok::<(), listboard::ListboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonStore {
    file_path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl StoreSource for JsonStore {
    fn load(&self) -> Result<CollectionStore> {
        load_store(&self.file_path)
    }
}

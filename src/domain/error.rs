//! Error types for the listboard core.
//!
//! This module defines the centralized error type [`ListboardError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for listboard operations.
///
/// The query core itself has only two failure modes (an invalid group index and an
/// empty collection store). The remaining variants cover loading a store or a
/// configuration file from disk.
///
/// # Examples
///
/// ```
/// use listboard::ListboardError;
///
/// let err = ListboardError::IndexOutOfBounds { index: 4, len: 3 };
/// assert_eq!(err.to_string(), "Group index 4 out of bounds (store has 3 groups)");
/// ```
#[derive(Debug, Error)]
pub enum ListboardError {
    /// The current group index does not address a group in the store.
    ///
    /// This is a caller contract violation. It is never clamped or retried.
    #[error("Group index {index} out of bounds (store has {len} groups)")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of groups in the store.
        len: usize,
    },

    /// Configuration is invalid.
    ///
    /// Raised for an empty collection store and for unreadable configuration files.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A store document could not be parsed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for listboard operations.
pub type Result<T> = std::result::Result<T, ListboardError>;

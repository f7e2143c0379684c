//! Mode types for the application layer.
//!
//! - [`SelectionPolicy`] decides when an out-of-range group index is reported.
//! - [`ViewMode`] tracks whether the statistics popup is open over the list.
//!
//! # Example
//!
//! ```rust
//! use listboard::app::{SelectionPolicy, ViewMode};
//!
//! let policy = SelectionPolicy::default();
//! assert_eq!(policy, SelectionPolicy::Lazy);
//! assert_eq!(ViewMode::default(), ViewMode::Browsing);
//! ```

use serde::Deserialize;

/// When group indices passed to [`Engine::set_selection`](super::Engine::set_selection)
/// are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Any index is stored. Queries fail with `IndexOutOfBounds` while it is invalid.
    #[default]
    Lazy,

    /// Out-of-range indices are rejected immediately and the previous selection is kept.
    Eager,
}

impl SelectionPolicy {
    /// Parses `"lazy"` or `"eager"` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lazy" => Some(Self::Lazy),
            "eager" => Some(Self::Eager),
            _ => None,
        }
    }
}

/// What the screen is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Carousel and searchable list.
    #[default]
    Browsing,

    /// Statistics popup presented over the list.
    Statistics,
}

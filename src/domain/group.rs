//! Group domain model.
//!
//! A group is one named, ordered collection of short text items. Groups are
//! identified by their position in the [`CollectionStore`](super::CollectionStore)
//! and never change after the store is built.

use serde::{Deserialize, Serialize};

/// One named, ordered collection of text items.
///
/// # Examples
///
/// ```
/// use listboard::Group;
///
/// let group = Group::new("Fruits", ["apple", "banana"]);
/// assert_eq!(group.name, "Fruits");
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Display name shown on the carousel page.
    pub name: String,
    /// Items in display order.
    pub items: Vec<String>,
}

impl Group {
    /// Creates a group from a name and any iterable of items.
    #[must_use]
    pub fn new<N, I, S>(name: N, items: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

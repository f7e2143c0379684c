//! Read-only collection store.
//!
//! The store is built once at startup and never mutated. It is guaranteed to hold
//! at least one group, so index `0` is always a valid selection.

use super::error::{ListboardError, Result};
use super::group::Group;

/// Ordered, non-empty sequence of [`Group`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStore {
    groups: Vec<Group>,
}

impl CollectionStore {
    /// Builds a store from its groups.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::Config`] if `groups` is empty, since no valid
    /// group index could exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use listboard::{CollectionStore, Group};
    ///
    /// let store = CollectionStore::new(vec![Group::new("Fruits", ["apple"])])?;
    /// assert_eq!(store.len(), 1);
    /// assert!(CollectionStore::new(vec![]).is_err());
    /// # Ok::<(), listboard::ListboardError>(())
    /// ```
    pub fn new(groups: Vec<Group>) -> Result<Self> {
        if groups.is_empty() {
            return Err(ListboardError::Config(
                "collection store must contain at least one group".to_string(),
            ));
        }
        tracing::debug!(groups = groups.len(), "collection store created");
        Ok(Self { groups })
    }

    /// Reference data shown by the demo screens.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            groups: vec![
                Group::new("Fruits", ["apple", "banana", "orange", "blueberry"]),
                Group::new("Vegetables", ["carrot", "broccoli", "spinach", "potato", "tomato"]),
                Group::new("Animals", ["dog", "cat", "elephant", "giraffe", "lion"]),
            ],
        }
    }

    /// Number of groups. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] when `index >= len()`.
    pub fn group(&self, index: usize) -> Result<&Group> {
        self.groups.get(index).ok_or(ListboardError::IndexOutOfBounds {
            index,
            len: self.groups.len(),
        })
    }

    /// All groups in store order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

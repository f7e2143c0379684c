//! Selection state: which group is current and what the user is searching for.

/// The pair of "which group is active" and "current search text".
///
/// A plain value owned by a single caller. The index is not validated here;
/// query operations check it against the store and fail with
/// [`ListboardError::IndexOutOfBounds`](super::ListboardError::IndexOutOfBounds).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_group_index: usize,
    pub search_query: String,
}

impl SelectionState {
    #[must_use]
    pub fn new(current_group_index: usize, search_query: impl Into<String>) -> Self {
        Self {
            current_group_index,
            search_query: search_query.into(),
        }
    }

    /// 1-based position of the current group, as shown to users.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.current_group_index.saturating_add(1)
    }
}

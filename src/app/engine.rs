//! The in-process query API: a collection store plus its selection state.

use super::modes::SelectionPolicy;
use crate::domain::{CollectionStore, Group, ListboardError, Result, SelectionState};
use crate::query::{self, FrequencySummary};

/// Owns the read-only store and the mutable selection.
///
/// Queries are pulled explicitly; nothing is recomputed on mutation.
///
/// # Example
///
/// ```rust
/// use listboard::{CollectionStore, Engine};
///
/// let mut engine = Engine::new(CollectionStore::sample());
/// engine.set_selection(0, "a")?;
/// assert_eq!(engine.filtered_items()?, ["apple", "banana", "orange"]);
/// assert!(engine.frequency_summary()?.to_string().starts_with("List 1 (4 items)"));
/// # Ok::<(), listboard::ListboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    store: CollectionStore,
    selection: SelectionState,
    policy: SelectionPolicy,
}

impl Engine {
    /// Creates an engine selecting the first group with an empty query.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        Self {
            store,
            selection: SelectionState::default(),
            policy: SelectionPolicy::default(),
        }
    }

    /// Builds the store from `groups` and wraps it in an engine.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::Config`] when `groups` is empty.
    pub fn from_groups(groups: Vec<Group>) -> Result<Self> {
        CollectionStore::new(groups).map(Self::new)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub const fn store(&self) -> &CollectionStore {
        &self.store
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Replaces both halves of the selection at once.
    ///
    /// Under [`SelectionPolicy::Lazy`] the index is stored as given. Under
    /// [`SelectionPolicy::Eager`] it is checked first.
    ///
    /// # Errors
    ///
    /// With the eager policy, returns [`ListboardError::IndexOutOfBounds`] and leaves
    /// the selection unchanged if `index` is not a group of the store.
    pub fn set_selection(&mut self, index: usize, query: impl Into<String>) -> Result<()> {
        if self.policy == SelectionPolicy::Eager {
            self.check_index(index)?;
        }
        self.selection = SelectionState::new(index, query);
        tracing::trace!(
            group = self.selection.current_group_index,
            query = %self.selection.search_query,
            "selection updated"
        );
        Ok(())
    }

    /// Moves to group `index`, always validating it. The query is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] if `index` is not a group of the store.
    pub fn select_group(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.selection.current_group_index = index;
        Ok(())
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.selection.search_query = query.into();
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.selection.search_query.push(ch);
    }

    /// Removes the last query character. Returns `false` if the query was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        self.selection.search_query.pop().is_some()
    }

    /// Advances the carousel one page, wrapping from the last group to the first.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] and leaves the selection unchanged
    /// if the current index is invalid.
    pub fn next_group(&mut self) -> Result<()> {
        let current = self.selection.current_group_index;
        self.check_index(current)?;
        self.selection.current_group_index = (current + 1) % self.store.len();
        Ok(())
    }

    /// Moves the carousel back one page, wrapping from the first group to the last.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] and leaves the selection unchanged
    /// if the current index is invalid.
    pub fn previous_group(&mut self) -> Result<()> {
        let current = self.selection.current_group_index;
        self.check_index(current)?;
        self.selection.current_group_index = current.checked_sub(1).unwrap_or(self.store.len() - 1);
        Ok(())
    }

    /// Items of the current group matching the search query.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] if the current index is invalid.
    pub fn filtered_items(&self) -> Result<Vec<&str>> {
        query::filtered_items(&self.store, &self.selection)
    }

    /// Top-character summary of the full current group, ignoring the query.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`] if the current index is invalid.
    pub fn frequency_summary(&self) -> Result<FrequencySummary> {
        query::frequency_summary(&self.store, &self.selection)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.store.len() {
            Ok(())
        } else {
            Err(ListboardError::IndexOutOfBounds {
                index,
                len: self.store.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(CollectionStore::sample())
    }

    #[test]
    fn from_groups_rejects_empty_store() {
        assert!(matches!(
            Engine::from_groups(vec![]).unwrap_err(),
            ListboardError::Config(_)
        ));
    }

    #[test]
    fn lazy_policy_defers_index_errors_to_queries() {
        let mut engine = engine();
        engine.set_selection(7, "a").unwrap();
        assert_eq!(engine.selection().current_group_index, 7);
        assert!(matches!(
            engine.filtered_items().unwrap_err(),
            ListboardError::IndexOutOfBounds { index: 7, len: 3 }
        ));
        assert!(engine.frequency_summary().is_err());
    }

    #[test]
    fn eager_policy_rejects_and_keeps_previous_selection() {
        let mut engine = engine().with_policy(SelectionPolicy::Eager);
        engine.set_selection(1, "rot").unwrap();

        let err = engine.set_selection(3, "x").unwrap_err();
        assert!(matches!(err, ListboardError::IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(engine.selection(), &SelectionState::new(1, "rot"));
        assert_eq!(engine.filtered_items().unwrap(), ["carrot"]);
    }

    #[test]
    fn select_group_always_validates() {
        let mut engine = engine();
        assert!(engine.select_group(3).is_err());
        engine.select_group(2).unwrap();
        assert_eq!(engine.selection().ordinal(), 3);
    }

    #[test]
    fn carousel_wraps_in_both_directions() {
        let mut engine = engine();
        engine.previous_group().unwrap();
        assert_eq!(engine.selection().current_group_index, 2);
        engine.next_group().unwrap();
        assert_eq!(engine.selection().current_group_index, 0);
        engine.next_group().unwrap();
        assert_eq!(engine.selection().current_group_index, 1);
    }

    #[test]
    fn carousel_refuses_to_move_from_an_invalid_index() {
        let mut engine = engine();
        engine.set_selection(7, "").unwrap();

        assert!(matches!(
            engine.next_group().unwrap_err(),
            ListboardError::IndexOutOfBounds { index: 7, len: 3 }
        ));
        assert!(matches!(
            engine.previous_group().unwrap_err(),
            ListboardError::IndexOutOfBounds { index: 7, len: 3 }
        ));
        assert_eq!(engine.selection().current_group_index, 7);
    }

    #[test]
    fn query_editing() {
        let mut engine = engine();
        engine.push_query_char('b');
        engine.push_query_char('L');
        assert_eq!(engine.filtered_items().unwrap(), ["blueberry"]);
        assert!(engine.pop_query_char());
        assert!(engine.pop_query_char());
        assert!(!engine.pop_query_char());
        assert_eq!(engine.filtered_items().unwrap().len(), 4);
    }
}

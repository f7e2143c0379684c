//! Case-insensitive substring filtering over the current group.
//!
//! Comparison uses Unicode default case folding (`caseless`), independent of locale,
//! so `ς`/`Σ`/`σ` and `ſ`/`S`/`s` compare equal. The same folding is used for filtering
//! and for computing highlight ranges so the two always agree.

use caseless::Caseless;

use crate::domain::{CollectionStore, Result, SelectionState};

/// Folds text for case-insensitive comparison.
///
/// ```
/// use listboard::query::fold;
///
/// assert_eq!(fold("BlueBerry"), "blueberry");
/// assert_eq!(fold("λόγος"), fold("ΛΌΓΟΣ"));
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    text.chars().default_case_fold().collect()
}

/// Returns `true` if `item` contains `query` ignoring case. An empty query matches everything.
#[must_use]
pub fn matches_query(item: &str, query: &str) -> bool {
    query.is_empty() || fold(item).contains(&fold(query))
}

/// Returns the items of the current group that contain the search query.
///
/// With an empty query the whole group is returned unchanged. Otherwise the result
/// is the subsequence of matching items in their original order.
///
/// # Errors
///
/// Returns [`ListboardError::IndexOutOfBounds`](crate::ListboardError::IndexOutOfBounds)
/// if the selection's group index is not in the store.
///
/// # Example
///
/// ```
/// use listboard::{CollectionStore, SelectionState};
/// use listboard::query::filtered_items;
///
/// let store = CollectionStore::sample();
/// let selection = SelectionState::new(0, "A");
/// assert_eq!(filtered_items(&store, &selection)?, ["apple", "banana", "orange"]);
/// # Ok::<(), listboard::ListboardError>(())
/// ```
pub fn filtered_items<'a>(
    store: &'a CollectionStore,
    selection: &SelectionState,
) -> Result<Vec<&'a str>> {
    let group = store.group(selection.current_group_index)?;

    let _span = tracing::debug_span!(
        "filtered_items",
        group = selection.current_group_index,
        total_items = group.len(),
        query_len = selection.search_query.len()
    )
    .entered();

    if selection.search_query.is_empty() {
        return Ok(group.iter().collect());
    }

    let needle = fold(&selection.search_query);
    let filtered: Vec<&str> = group
        .iter()
        .filter(|item| fold(item).contains(&needle))
        .collect();

    tracing::trace!(filtered_count = filtered.len(), "search filter applied");

    Ok(filtered)
}

/// Computes the character ranges of `item` matched by `query`.
///
/// Each tuple is `(start, end)` in character indices of `item`, end exclusive.
/// Occurrences are found left to right without overlap; ranges that touch the
/// same source character are merged.
///
/// ```
/// use listboard::query::match_ranges;
///
/// assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
/// assert!(match_ranges("apple", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(item: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let needle = fold(query);
    let mut folded = String::with_capacity(item.len());
    let mut starts = Vec::new();
    for ch in item.chars() {
        starts.push(folded.len());
        folded.extend(std::iter::once(ch).default_case_fold());
    }

    // Index of the source character that produced the folded byte at `byte`.
    let source_char = |byte: usize| starts.partition_point(|&s| s <= byte) - 1;

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(pos) = folded[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let range = (source_char(start), source_char(end - 1) + 1);

        match ranges.last_mut() {
            Some(last) if range.0 < last.1 => last.1 = last.1.max(range.1),
            _ => ranges.push(range),
        }
        from = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, ListboardError};

    fn fruits() -> CollectionStore {
        CollectionStore::new(vec![Group::new(
            "Fruits",
            ["apple", "banana", "orange", "blueberry"],
        )])
        .unwrap()
    }

    #[test]
    fn empty_query_returns_whole_group() {
        let store = fruits();
        let items = filtered_items(&store, &SelectionState::default()).unwrap();
        assert_eq!(items, ["apple", "banana", "orange", "blueberry"]);
    }

    #[test]
    fn query_keeps_matching_items_in_order() {
        let store = fruits();
        let items = filtered_items(&store, &SelectionState::new(0, "a")).unwrap();
        assert_eq!(items, ["apple", "banana", "orange"]);
    }

    #[test]
    fn query_is_case_insensitive_both_ways() {
        let store = CollectionStore::new(vec![Group::new("Mixed", ["Apple", "GRAPE", "kiwi"])]).unwrap();
        assert_eq!(
            filtered_items(&store, &SelectionState::new(0, "AP")).unwrap(),
            ["Apple", "GRAPE"]
        );
    }

    #[test]
    fn non_ascii_items_match_under_case_folding() {
        let store = CollectionStore::new(vec![Group::new(
            "Words",
            ["λόγος", "ſtar", "Straße", "plain"],
        )])
        .unwrap();
        let query = |q: &str| filtered_items(&store, &SelectionState::new(0, q)).unwrap();

        assert_eq!(query("ΟΣ"), ["λόγος"]);
        assert_eq!(query("STAR"), ["ſtar"]);
        assert_eq!(query("STRASSE"), ["Straße"]);
        assert_eq!(match_ranges("λόγος", "ΟΣ"), vec![(3, 5)]);
        assert_eq!(match_ranges("ſtar", "st"), vec![(0, 2)]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let store = fruits();
        assert!(filtered_items(&store, &SelectionState::new(0, "zz")).unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_index_fails() {
        let store = fruits();
        let err = filtered_items(&store, &SelectionState::new(1, "")).unwrap_err();
        assert!(matches!(err, ListboardError::IndexOutOfBounds { index: 1, len: 1 }));
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Éclair", "éc"), vec![(0, 2)]);
        assert_eq!(match_ranges("blueberry", "E"), vec![(3, 4), (5, 6)]);
        assert!(match_ranges("kiwi", "x").is_empty());
    }

    #[test]
    fn match_ranges_do_not_overlap() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn matches_query_agrees_with_filter() {
        assert!(matches_query("Blueberry", "BERRY"));
        assert!(matches_query("anything", ""));
        assert!(!matches_query("apple", "pear"));
    }
}

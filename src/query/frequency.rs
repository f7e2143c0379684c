//! Character-frequency summary of the current group.
//!
//! The summary always covers the full group. The active search query is ignored,
//! so regenerating statistics from a filtered view still reports the whole group.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{CollectionStore, Group, Result, SelectionState};

/// Number of `(character, count)` pairs kept in a summary.
pub const TOP_CHARACTERS: usize = 3;

/// Frequency-ranked character report for one group.
///
/// `Display` renders the report text consumed by the statistics popup:
///
/// ```text
/// List 1 (4 items)
/// a = 5
/// e = 4
/// b = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySummary {
    /// 1-based position of the group in the store.
    pub ordinal: usize,
    /// Number of items in the group.
    pub item_count: usize,
    /// At most [`TOP_CHARACTERS`] pairs, highest count first.
    pub pairs: Vec<(char, usize)>,
}

impl fmt::Display for FrequencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "List {} ({} items)", self.ordinal, self.item_count)?;
        for (character, count) in &self.pairs {
            writeln!(f, "{character} = {count}")?;
        }
        Ok(())
    }
}

/// Counts every character of every item, in first-encounter order.
///
/// Items are scanned in order, characters left to right. The returned vector lists
/// each distinct character once, positioned where it was first seen.
#[must_use]
pub fn tally(group: &Group) -> Vec<(char, usize)> {
    let mut positions: HashMap<char, usize> = HashMap::new();
    let mut counts: Vec<(char, usize)> = Vec::new();

    for ch in group.iter().flat_map(str::chars) {
        let slot = *positions.entry(ch).or_insert_with(|| {
            counts.push((ch, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    counts
}

/// Builds the frequency summary of the current group.
///
/// Counts are sorted descending with a stable sort, so characters with equal
/// counts keep their first-encounter order. Only the first [`TOP_CHARACTERS`]
/// pairs are kept.
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
/// use listboard::query::frequency_summary;
///
/// let store = CollectionStore::sample();
/// let summary = frequency_summary(&store, &SelectionState::new(0, "ignored"))?;
/// assert_eq!(summary.to_string(), "List 1 (4 items)\na = 5\ne = 4\nb = 3\n");
/// # Ok::<(), listboard::ListboardError>(())
/// ```
pub fn frequency_summary(
    store: &CollectionStore,
    selection: &SelectionState,
) -> Result<FrequencySummary> {
    let group = store.group(selection.current_group_index)?;

    let _span = tracing::debug_span!(
        "frequency_summary",
        group = selection.current_group_index,
        total_items = group.len()
    )
    .entered();

    let mut pairs = tally(group);
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs.truncate(TOP_CHARACTERS);

    tracing::debug!(top = ?pairs, "frequency summary computed");

    Ok(FrequencySummary {
        ordinal: selection.ordinal(),
        item_count: group.len(),
        pairs,
    })
}

//! Query engine over the collection store.
//!
//! Both operations are pure functions of a [`CollectionStore`](crate::CollectionStore)
//! and a [`SelectionState`](crate::SelectionState). Nothing is cached; callers pull
//! fresh results whenever the selection changes.
//!
//! - [`filter`]: case-insensitive substring filtering and match highlighting
//! - [`frequency`]: top-character summary of the current group

pub mod filter;
pub mod frequency;

pub use filter::{filtered_items, fold, match_ranges, matches_query};
pub use frequency::{frequency_summary, tally, FrequencySummary, TOP_CHARACTERS};

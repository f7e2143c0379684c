//! Property tests for the query engine: filtering and frequency summaries.

use listboard::query::{filtered_items, fold, frequency_summary, TOP_CHARACTERS};
use listboard::{CollectionStore, Group, SelectionState};
use proptest::prelude::*;
use std::collections::HashMap;

fn items() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C ]{0,6}", 0..12)
}

fn store_with(items: Vec<String>) -> CollectionStore {
    CollectionStore::new(vec![Group::new("Only", items)]).unwrap()
}

proptest! {
    /// An empty query returns the group exactly.
    #[test]
    fn prop_empty_query_is_identity(items in items()) {
        let store = store_with(items.clone());
        let result = filtered_items(&store, &SelectionState::default()).unwrap();
        prop_assert_eq!(result, items.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Filtering keeps exactly the items that contain the query ignoring case, in order.
    #[test]
    fn prop_filter_is_ordered_case_insensitive_subsequence(
        items in items(),
        query in "[a-cA-C]{1,3}"
    ) {
        let store = store_with(items.clone());
        let result = filtered_items(&store, &SelectionState::new(0, query.clone())).unwrap();

        let expected: Vec<&str> = items
            .iter()
            .map(String::as_str)
            .filter(|item| item.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        prop_assert_eq!(&result, &expected);

        let mut source = items.iter();
        for kept in &result {
            prop_assert!(source.any(|item| item.as_str() == *kept), "{} out of order", kept);
        }
        prop_assert!(result.iter().all(|item| fold(item).contains(&fold(&query))));
    }

    /// The summary header names the 1-based group and its full item count.
    #[test]
    fn prop_summary_header(groups in prop::collection::vec(items(), 1..5), pick in any::<prop::sample::Index>()) {
        let store = CollectionStore::new(
            groups.iter().enumerate().map(|(i, g)| Group::new(format!("G{i}"), g.clone())).collect(),
        ).unwrap();
        let index = pick.index(groups.len());

        let text = frequency_summary(&store, &SelectionState::new(index, "a")).unwrap().to_string();
        let expected_header = format!("List {} ({} items)\n", index + 1, groups[index].len());
        prop_assert!(text.starts_with(&expected_header));
    }

    /// At most three pairs, each count exact against a brute-force recount of the
    /// whole group, highest first.
    #[test]
    fn prop_summary_counts_are_accurate(items in items(), query in "[a-c]{0,2}") {
        let store = store_with(items.clone());
        let summary = frequency_summary(&store, &SelectionState::new(0, query)).unwrap();

        let mut recount: HashMap<char, usize> = HashMap::new();
        for ch in items.iter().flat_map(|item| item.chars()) {
            *recount.entry(ch).or_default() += 1;
        }

        prop_assert!(summary.pairs.len() <= TOP_CHARACTERS);
        prop_assert_eq!(summary.pairs.len(), recount.len().min(TOP_CHARACTERS));
        for (ch, count) in &summary.pairs {
            prop_assert_eq!(recount.get(ch), Some(count));
        }
        prop_assert!(summary.pairs.windows(2).all(|w| w[0].1 >= w[1].1));
        if let Some((_, top)) = summary.pairs.first() {
            prop_assert_eq!(Some(top), recount.values().max());
        }
        prop_assert_eq!(summary.to_string().lines().count(), 1 + summary.pairs.len());
    }

    /// Repeated queries over unchanged state give identical results.
    #[test]
    fn prop_queries_are_deterministic(items in items(), query in "[a-c]{0,2}") {
        let store = store_with(items);
        let selection = SelectionState::new(0, query);

        prop_assert_eq!(
            filtered_items(&store, &selection).unwrap(),
            filtered_items(&store, &selection).unwrap()
        );
        prop_assert_eq!(
            frequency_summary(&store, &selection).unwrap(),
            frequency_summary(&store, &selection).unwrap()
        );
    }
}

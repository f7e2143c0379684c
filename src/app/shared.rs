//! Thread-safe handle to an [`Engine`].
//!
//! Every read and write takes the same lock, so a reader never sees the index
//! from one update paired with the query from another.

use std::sync::Arc;

use parking_lot::Mutex;

use super::engine::Engine;
use crate::domain::{Result, SelectionState};
use crate::query::FrequencySummary;

/// Cloneable handle serializing access to one engine's selection state.
///
/// # Example
///
/// ```rust
/// use listboard::{CollectionStore, Engine};
/// use listboard::app::SharedEngine;
///
/// let shared = SharedEngine::new(Engine::new(CollectionStore::sample()));
/// let handle = shared.clone();
/// std::thread::spawn(move || handle.set_selection(1, "o")).join().unwrap()?;
/// assert_eq!(shared.filtered_items()?, ["carrot", "broccoli", "potato", "tomato"]);
/// # Ok::<(), listboard::ListboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<Engine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Engine::set_selection`].
    ///
    /// # Errors
    ///
    /// Same as [`Engine::set_selection`].
    pub fn set_selection(&self, index: usize, query: impl Into<String>) -> Result<()> {
        self.inner.lock().set_selection(index, query)
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.inner.lock().set_search_query(query);
    }

    /// Snapshot of the current selection.
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.inner.lock().selection().clone()
    }

    /// Owned copy of [`Engine::filtered_items`].
    ///
    /// # Errors
    ///
    /// Same as [`Engine::filtered_items`].
    pub fn filtered_items(&self) -> Result<Vec<String>> {
        let engine = self.inner.lock();
        let items = engine.filtered_items()?;
        Ok(items.into_iter().map(str::to_string).collect())
    }

    /// See [`Engine::frequency_summary`].
    ///
    /// # Errors
    ///
    /// Same as [`Engine::frequency_summary`].
    pub fn frequency_summary(&self) -> Result<FrequencySummary> {
        self.inner.lock().frequency_summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollectionStore, Group};
    use std::thread;

    #[test]
    fn concurrent_writers_never_tear_the_selection() {
        let engine = Engine::from_groups(vec![
            Group::new("Zero", ["a0"]),
            Group::new("One", ["b1"]),
        ])
        .unwrap();
        let shared = SharedEngine::new(engine);

        let writers: Vec<_> = (0..2)
            .map(|index| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        handle.set_selection(index, format!("q{index}")).unwrap();
                    }
                })
            })
            .collect();

        for _ in 0..500 {
            let selection = shared.selection();
            if !selection.search_query.is_empty() {
                assert_eq!(
                    selection.search_query,
                    format!("q{}", selection.current_group_index)
                );
            }
        }

        for writer in writers {
            writer.join().unwrap();
        }
    }

    #[test]
    fn with_engine_gives_exclusive_access() {
        let shared = SharedEngine::new(Engine::new(CollectionStore::sample()));
        shared.with_engine(|engine| {
            engine.next_group().unwrap();
            engine.set_search_query("li");
        });
        assert_eq!(shared.filtered_items().unwrap(), ["broccoli"]);
        assert_eq!(shared.frequency_summary().unwrap().ordinal, 2);
    }
}

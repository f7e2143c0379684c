//! Application state and view model computation.
//!
//! [`AppState`] wraps the [`Engine`] with the bits of screen state the demo needs:
//! whether the statistics popup is open and the summary it shows. View models are
//! computed on demand from a state snapshot.
//!
//! # Example
//!
//! ```rust
//! use listboard::{AppState, CollectionStore, Engine};
//!
//! let state = AppState::new(Engine::new(CollectionStore::sample()));
//! let viewmodel = state.compute_viewmodel()?;
//! assert_eq!(viewmodel.header.title, "Fruits (4/4)");
//! # Ok::<(), listboard::ListboardError>(())
//! ```

use super::engine::Engine;
use super::modes::ViewMode;
use crate::domain::Result;
use crate::query::{self, FrequencySummary};
use crate::ui::viewmodel::{
    CarouselInfo, DisplayItem, EmptyState, HeaderInfo, ListViewModel, SearchBarInfo,
    StatisticsPopup,
};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store, selection and queries.
    pub engine: Engine,

    /// Whether the statistics popup is showing.
    pub view_mode: ViewMode,

    /// Summary shown in the popup. Set while `view_mode` is `Statistics`.
    pub statistics: Option<FrequencySummary>,
}

impl AppState {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            view_mode: ViewMode::Browsing,
            statistics: None,
        }
    }

    /// Computes a summary of the current group and opens the popup with it.
    ///
    /// # Errors
    ///
    /// Propagates [`ListboardError::IndexOutOfBounds`](crate::ListboardError::IndexOutOfBounds)
    /// from the engine. The popup stays closed in that case.
    pub fn open_statistics(&mut self) -> Result<&FrequencySummary> {
        let summary = self.engine.frequency_summary()?;
        self.view_mode = ViewMode::Statistics;
        Ok(self.statistics.insert(summary))
    }

    pub fn close_statistics(&mut self) {
        self.view_mode = ViewMode::Browsing;
        self.statistics = None;
    }

    /// Computes a renderable view model from current state.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::IndexOutOfBounds`](crate::ListboardError::IndexOutOfBounds)
    /// if the current group index is invalid.
    pub fn compute_viewmodel(&self) -> Result<ListViewModel> {
        let store = self.engine.store();
        let selection = self.engine.selection();
        let group = store.group(selection.current_group_index)?;
        let visible = self.engine.filtered_items()?;

        let rows: Vec<DisplayItem> = visible
            .iter()
            .map(|item| DisplayItem {
                text: (*item).to_string(),
                highlight_ranges: query::match_ranges(item, &selection.search_query),
            })
            .collect();

        let empty_state = if !rows.is_empty() {
            None
        } else if group.is_empty() {
            Some(EmptyState {
                message: "No items".to_string(),
                subtitle: format!("{} is empty", group.name),
            })
        } else {
            Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: format!(
                    "Nothing in {} contains \"{}\"",
                    group.name, selection.search_query
                ),
            })
        };

        let statistics = match (self.view_mode, &self.statistics) {
            (ViewMode::Statistics, Some(summary)) => Some(StatisticsPopup {
                text: summary.to_string(),
            }),
            _ => None,
        };

        Ok(ListViewModel {
            carousel: CarouselInfo {
                pages: store.groups().iter().map(|g| g.name.clone()).collect(),
                current_page: selection.current_group_index,
            },
            header: HeaderInfo {
                title: format!("{} ({}/{})", group.name, rows.len(), group.len()),
            },
            rows,
            search_bar: SearchBarInfo {
                query: selection.search_query.clone(),
            },
            empty_state,
            statistics,
        })
    }
}

//! View model types representing renderable UI state.
//!
//! View models are created by [`AppState::compute_viewmodel`](crate::AppState::compute_viewmodel)
//! and consumed by the GUI. They carry display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use listboard::ui::viewmodel::{CarouselInfo, DisplayItem, HeaderInfo, ListViewModel, SearchBarInfo};
//!
//! let vm = ListViewModel {
//!     carousel: CarouselInfo { pages: vec!["Fruits".to_string()], current_page: 0 },
//!     header: HeaderInfo { title: "Fruits (1/4)".to_string() },
//!     rows: vec![DisplayItem { text: "blueberry".to_string(), highlight_ranges: vec![(0, 4)] }],
//!     search_bar: SearchBarInfo { query: "blue".to_string() },
//!     empty_state: None,
//!     statistics: None,
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

/// Complete view model for the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Carousel pages, one per group.
    pub carousel: CarouselInfo,

    /// Title above the list.
    pub header: HeaderInfo,

    /// Items of the current group that pass the search filter.
    pub rows: Vec<DisplayItem>,

    /// Search field contents.
    pub search_bar: SearchBarInfo,

    /// Shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Statistics popup, when open.
    pub statistics: Option<StatisticsPopup>,
}

/// Carousel state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselInfo {
    /// Group names in store order.
    pub pages: Vec<String>,

    /// Zero-based index of the page in view.
    pub current_page: usize,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Item text as stored in the group.
    pub text: String,

    /// Character ranges to highlight for search matches.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// `"{group name} ({visible}/{total})"`.
    pub title: String,
}

/// Search field display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matches").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Statistics popup contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsPopup {
    /// Report text, one newline-terminated line per entry.
    pub text: String,
}

//! Actions the presentation layer must carry out after an event.
//!
//! The handler mutates [`AppState`](super::AppState) directly; actions cover only
//! what the core cannot do itself, such as presenting the statistics popup.
//!
//! # Example
//!
//! ```rust
//! use listboard::app::Action;
//!
//! let actions = vec![Action::DismissStatistics];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::query::FrequencySummary;

/// Commands for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Presents (or refreshes) the statistics popup with this summary.
    PresentStatistics(FrequencySummary),

    /// Closes the statistics popup.
    DismissStatistics,
}

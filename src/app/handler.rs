//! Event handling and state transition logic.
//!
//! The presentation layer turns carousel swipes, search field edits and button taps
//! into [`Event`]s. [`handle_event`] applies them to [`AppState`] and returns
//! whether a re-render is needed together with any [`Action`]s to carry out.
//!
//! While the statistics popup is open, list and carousel input is ignored; only
//! the popup's own events are processed.
//!
//! # Example
//!
//! ```rust
//! use listboard::{AppState, CollectionStore, Engine};
//! use listboard::app::{handle_event, Action, Event};
//!
//! let mut state = AppState::new(Engine::new(CollectionStore::sample()));
//! let (render, actions) = handle_event(&mut state, &Event::ShowStatistics)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PresentStatistics(_)));
//! # Ok::<(), listboard::ListboardError>(())
//! ```

use super::actions::Action;
use super::modes::ViewMode;
use super::state::AppState;
use crate::domain::Result;

/// User interactions forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Jumps the carousel to a group. The index is validated.
    SelectGroup(usize),
    /// Swipes the carousel forward (wraps to the first group).
    NextGroup,
    /// Swipes the carousel back (wraps to the last group).
    PreviousGroup,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Replaces the whole search query.
    SetQuery(String),
    /// Clears the search query.
    ClearSearch,
    /// Opens the statistics popup for the current group.
    ShowStatistics,
    /// Recomputes the summary shown in the open popup.
    RegenerateStatistics,
    /// Closes the statistics popup.
    DismissStatistics,
}

impl Event {
    const fn is_list_input(&self) -> bool {
        !matches!(
            self,
            Self::ShowStatistics | Self::RegenerateStatistics | Self::DismissStatistics
        )
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`. `needs_render` is `false` when the event changed nothing.
///
/// # Errors
///
/// Returns [`ListboardError::IndexOutOfBounds`](crate::ListboardError::IndexOutOfBounds)
/// for `SelectGroup` with an invalid index, and when the carousel is swiped or
/// statistics are requested while the current index is invalid.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.view_mode == ViewMode::Statistics && event.is_list_input() {
        tracing::trace!("statistics popup open, ignoring list input");
        return Ok((false, vec![]));
    }

    match event {
        Event::SelectGroup(index) => {
            let before = state.engine.selection().current_group_index;
            state.engine.select_group(*index)?;
            Ok((before != *index, vec![]))
        }
        Event::NextGroup => {
            state.engine.next_group()?;
            Ok((true, vec![]))
        }
        Event::PreviousGroup => {
            state.engine.previous_group()?;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            state.engine.push_query_char(*c);
            tracing::trace!(query = %state.engine.selection().search_query, char = %c, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.engine.pop_query_char(), vec![])),
        Event::SetQuery(query) => {
            if &state.engine.selection().search_query == query {
                return Ok((false, vec![]));
            }
            state.engine.set_search_query(query.clone());
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if state.engine.selection().search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.engine.set_search_query(String::new());
            Ok((true, vec![]))
        }
        Event::ShowStatistics | Event::RegenerateStatistics => {
            if matches!(event, Event::RegenerateStatistics) && state.view_mode != ViewMode::Statistics {
                tracing::debug!("no statistics popup to regenerate");
                return Ok((false, vec![]));
            }
            let summary = state.open_statistics()?.clone();
            tracing::debug!(
                ordinal = summary.ordinal,
                item_count = summary.item_count,
                "statistics presented"
            );
            Ok((true, vec![Action::PresentStatistics(summary)]))
        }
        Event::DismissStatistics => {
            if state.view_mode != ViewMode::Statistics {
                return Ok((false, vec![]));
            }
            state.close_statistics();
            Ok((true, vec![Action::DismissStatistics]))
        }
    }
}

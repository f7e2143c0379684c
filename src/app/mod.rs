//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the GUI and the query core. Data flows one way:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Presentation
//!                                             ↓
//!                                    View Model (pulled on render)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commands for the presentation layer
//! - [`engine`]: Store + selection with the two query operations
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Selection policy and view mode types
//! - [`shared`]: Lock-protected engine handle for multi-threaded callers
//! - [`state`]: Screen state and view model computation
//!
//! # Example
//!
//! ```rust
//! use listboard::{AppState, CollectionStore, Engine};
//! use listboard::app::{handle_event, Event};
//!
//! let mut state = AppState::new(Engine::new(CollectionStore::sample()));
//! handle_event(&mut state, &Event::Char('a'))?;
//! assert_eq!(state.compute_viewmodel()?.rows.len(), 3);
//! # Ok::<(), listboard::ListboardError>(())
//! ```

pub mod actions;
pub mod engine;
pub mod handler;
pub mod modes;
pub mod shared;
pub mod state;

pub use actions::Action;
pub use engine::Engine;
pub use handler::{handle_event, Event};
pub use modes::{SelectionPolicy, ViewMode};
pub use shared::SharedEngine;
pub use state::AppState;

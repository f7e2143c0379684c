//! Presentation-facing types.
//!
//! The crate does not draw anything. It hands the GUI a [`viewmodel::ListViewModel`]
//! describing what to show.

pub mod viewmodel;

pub use viewmodel::ListViewModel;

//! Domain layer for listboard.
//!
//! Core data types, independent of any presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`group`]: A named, ordered collection of text items
//! - [`selection`]: Current group index and search query
//! - [`store`]: The read-only, non-empty collection of groups
//!
//! # Examples
//!
//! ```
//! use listboard::domain::{CollectionStore, Group, Result};
//!
//! fn build() -> Result<CollectionStore> {
//!     CollectionStore::new(vec![Group::new("Fruits", ["apple", "banana"])])
//! }
//! # build().unwrap();
//! ```

pub mod error;
pub mod group;
pub mod selection;
pub mod store;

pub use error::{ListboardError, Result};
pub use group::Group;
pub use selection::SelectionState;
pub use store::CollectionStore;

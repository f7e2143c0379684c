//! Loading the collection store.
//!
//! The store is read once at startup from a [`StoreSource`]: either the built-in
//! reference data or a JSON document on disk.
//!
//! # Modules
//!
//! - `source`: Store source trait and the built-in source
//! - `json`: JSON document format and file-backed source

pub mod json;
pub mod source;

pub use json::{load_store, parse_store, JsonStore, STORE_FORMAT_VERSION};
pub use source::{BuiltinStore, StoreSource};

//! Store source abstraction.
//!
//! A [`StoreSource`] produces the collection store once at startup. The store is
//! read-only afterwards, so sources only need to load, never save.

use crate::domain::{CollectionStore, Result};

/// Anything that can produce a [`CollectionStore`].
///
/// # Implementations
///
/// - [`BuiltinStore`]: the demo's reference data
/// - [`JsonStore`](super::JsonStore): a JSON document on disk
pub trait StoreSource {
    /// Loads the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or describes an empty store.
    fn load(&self) -> Result<CollectionStore>;
}

/// Source returning [`CollectionStore::sample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStore;

impl StoreSource for BuiltinStore {
    fn load(&self) -> Result<CollectionStore> {
        tracing::debug!("using built-in sample store");
        Ok(CollectionStore::sample())
    }
}

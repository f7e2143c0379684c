//! Listboard: the query core of a carousel + searchable list demo.
//!
//! The GUI shows a carousel of groups, a search-filtered list of the current
//! group's items, and a statistics popup. This crate owns everything below the
//! drawing code:
//!
//! - A read-only collection store of named, ordered groups of short text items
//! - The selection state (current group and search query)
//! - Case-insensitive substring filtering of the current group
//! - A top-three character-frequency summary of the current group
//! - Event handling and view models for the presentation layer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  GUI (external)                                     │  ← Renders view models
//! └─────────────────────────────────────────────────────┘
//!                        │ Events
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Engine: store + selection                        │
//! │  - Event handling, popup state                      │
//! │  - View model computation (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ Query Engine (query/) │   │ Store Loading         │
//! │ - Filtering           │   │ (storage/)            │
//! │ - Frequency summary   │   │ - JSON documents      │
//! └───────────────────────┘   └───────────────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Group, CollectionStore,          │
//! │  SelectionState, ListboardError                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Engine, events, actions and screen state
//! - [`domain`]: Core types and errors
//! - [`query`]: Pure filtering and frequency operations
//! - [`storage`]: Loading a store from JSON or the built-in sample
//! - [`ui`]: View model types
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use listboard::{initialize, Config};
//! use listboard::app::{handle_event, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::Char('a'))?;
//! assert_eq!(state.engine.filtered_items()?, ["apple", "banana", "orange"]);
//!
//! handle_event(&mut state, &Event::ShowStatistics)?;
//! let popup = state.compute_viewmodel()?.statistics.unwrap();
//! assert_eq!(popup.text, "List 1 (4 items)\na = 5\ne = 4\nb = 3\n");
//! # Ok::<(), listboard::ListboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod query;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Engine, Event, SelectionPolicy, ViewMode};
pub use domain::{CollectionStore, Group, ListboardError, Result, SelectionState};
pub use query::FrequencySummary;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{BuiltinStore, JsonStore, StoreSource};

/// Runtime configuration.
///
/// Built from defaults, from a string map handed over by the host application, or
/// from a TOML file:
///
/// ```toml
/// store_file = "/path/to/groups.json"
/// selection_policy = "eager"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON store document to load. The built-in sample store is used when unset.
    pub store_file: Option<PathBuf>,

    /// When selection indices are validated. Default: lazy.
    pub selection_policy: SelectionPolicy,

    /// Tracing filter directive, e.g. `"debug"`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored and unparseable values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use listboard::{Config, SelectionPolicy};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("selection_policy".to_string(), "Eager".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.selection_policy, SelectionPolicy::Eager);
    /// assert!(config.store_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let store_file = config
            .get("store_file")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let selection_policy = config
            .get("selection_policy")
            .and_then(|s| {
                SelectionPolicy::from_name(s).or_else(|| {
                    tracing::debug!(value = %s, "unknown selection policy, using default");
                    None
                })
            })
            .unwrap_or_default();

        Self {
            store_file,
            selection_policy,
            trace_level: config
                .get("trace_level")
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::Config`] for invalid TOML, unknown keys, or bad values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ListboardError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ListboardError::Io`] if the file cannot be read, otherwise the errors
    /// of [`Config::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn store_source(&self) -> Box<dyn StoreSource> {
        match &self.store_file {
            Some(path) => Box::new(JsonStore::new(path.clone())),
            None => Box::new(BuiltinStore),
        }
    }
}

/// Builds the application state described by `config`.
///
/// Loads the collection store (from `store_file` or the built-in sample) and
/// selects the first group with an empty query.
///
/// # Errors
///
/// Propagates store loading errors: [`ListboardError::Io`], [`ListboardError::Storage`],
/// or [`ListboardError::Config`] for a store with no groups.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(store_file = ?config.store_file, policy = ?config.selection_policy, "initializing listboard");

    let store = config.store_source().load()?;
    let engine = Engine::new(store).with_policy(config.selection_policy);

    Ok(AppState::new(engine))
}

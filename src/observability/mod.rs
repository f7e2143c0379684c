//! Structured logging setup.
//!
//! The crate emits `tracing` spans and events along the query and event paths.
//! [`init_tracing`] installs a `tracing-subscriber` pipeline for binaries and tests
//! that want to see them:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Configuration
//!
//! The filter is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in [`Config`](crate::Config)
//! 3. Default: `"info"`

mod init;

pub use init::{init_tracing, resolve_filter};

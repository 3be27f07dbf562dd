//! Storage engine for the roster
//!
//! Holds the in-memory [`RecordStore`] and the [`RosterConfig`] that seeds it.
//! All state lives for the lifetime of the process; nothing is persisted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod store;

pub use config::{ConfigError, RosterConfig, CONFIG_FILE_NAME};
pub use store::{demo_seed, RecordStore};

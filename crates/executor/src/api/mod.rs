//! Typed facade over the executor.
//!
//! [`Roster`] wraps an [`Executor`] and exposes one method per command. Each
//! method dispatches a [`Command`] and unpacks the expected [`Output`]
//! variant, so callers work with plain Rust types.

mod form;
mod records;

use roster_engine::{RecordStore, RosterConfig};

use crate::{Command, Executor, Output, Result};

/// The roster: a record store plus its add/edit form
#[derive(Debug, Clone)]
pub struct Roster {
    executor: Executor,
}

impl Roster {
    /// Roster over the demo seed
    pub fn new() -> Self {
        Self::from_store(RecordStore::seeded())
    }

    /// Roster over an existing store
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            executor: Executor::new(store),
        }
    }

    /// Roster seeded from configuration
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        let store = config.build_store()?;
        Ok(Self::from_store(store))
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run a raw command
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

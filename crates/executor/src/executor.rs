//! Command executor.
//!
//! Owns the record store and the form session and routes each [`Command`]
//! to its handler. Everything runs synchronously on the caller's thread.

use roster_engine::RecordStore;

use crate::form::FormSession;
use crate::handlers::{form, records};
use crate::{Command, Output, Result};

/// Executes commands against one record store
#[derive(Debug, Clone, Default)]
pub struct Executor {
    store: RecordStore,
    form: FormSession,
}

impl Executor {
    /// Create an executor over `store` with the form closed
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            form: FormSession::new(),
        }
    }

    /// Read access to the store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Read access to the form session
    pub fn form(&self) -> &FormSession {
        &self.form
    }

    /// Run one command
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let is_write = cmd.is_write();
        let result = self.dispatch(cmd);
        match &result {
            Ok(_) if is_write => {
                tracing::debug!(target: "roster::executor", command = name, len = self.store.len(), "write applied");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(target: "roster::executor", command = name, error = %e, "command failed");
            }
        }
        result
    }

    fn dispatch(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::RecordInsert { record } => records::record_insert(&mut self.store, record),
            Command::RecordUpdate { key, changes } => {
                records::record_update(&mut self.store, key, changes)
            }
            Command::RecordDelete { key } => records::record_delete(&mut self.store, key),
            Command::RecordList => records::record_list(&self.store),
            Command::RecordGet { key } => records::record_get(&self.store, key),
            Command::FormOpenCreate => form::form_open_create(&mut self.form),
            Command::FormOpenEdit { key } => form::form_open_edit(&mut self.form, &self.store, key),
            Command::FormCancel => form::form_cancel(&mut self.form),
            Command::FormView => form::form_view(&self.form),
            Command::FormSubmit { values } => {
                form::form_submit(&mut self.form, &mut self.store, values)
            }
        }
    }
}

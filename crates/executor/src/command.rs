//! Commands accepted by the executor.
//!
//! Every interaction the presentation layer has with the store is one of
//! these values. Commands are plain data and serialize with serde, so a
//! front end can log or replay them.

use crate::form::FormValues;
use roster_core::{Record, RecordChanges, RegistrationNumber};
use serde::{Deserialize, Serialize};

/// A request to the executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // =========================================================================
    // Records (5)
    // =========================================================================
    /// Append a new record. Returns `Output::Unit`.
    RecordInsert {
        /// Candidate record
        record: Record,
    },
    /// Change name and designation of an existing record. Returns `Output::Unit`.
    RecordUpdate {
        /// Key of the record to change
        key: RegistrationNumber,
        /// Replacement values
        changes: RecordChanges,
    },
    /// Remove a record. Returns `Output::Bool(existed)`.
    RecordDelete {
        /// Key of the record to remove
        key: RegistrationNumber,
    },
    /// All records in display order. Returns `Output::Records`.
    RecordList,
    /// One record by key. Returns `Output::MaybeRecord`.
    RecordGet {
        /// Key to look up
        key: RegistrationNumber,
    },

    // =========================================================================
    // Form (5)
    // =========================================================================
    /// Open a blank add dialog. Returns `Output::Form`.
    FormOpenCreate,
    /// Open the edit dialog for a record. Returns `Output::Form`.
    FormOpenEdit {
        /// Key of the record to edit
        key: RegistrationNumber,
    },
    /// Close the dialog. Returns `Output::Form`.
    FormCancel,
    /// Current dialog state. Returns `Output::Form`.
    FormView,
    /// Submit the dialog. Returns `Output::Notification`.
    FormSubmit {
        /// Field text as entered
        values: FormValues,
    },
}

impl Command {
    /// Command name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::RecordInsert { .. } => "RecordInsert",
            Command::RecordUpdate { .. } => "RecordUpdate",
            Command::RecordDelete { .. } => "RecordDelete",
            Command::RecordList => "RecordList",
            Command::RecordGet { .. } => "RecordGet",
            Command::FormOpenCreate => "FormOpenCreate",
            Command::FormOpenEdit { .. } => "FormOpenEdit",
            Command::FormCancel => "FormCancel",
            Command::FormView => "FormView",
            Command::FormSubmit { .. } => "FormSubmit",
        }
    }

    /// Whether this command can change the record store
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::RecordInsert { .. }
                | Command::RecordUpdate { .. }
                | Command::RecordDelete { .. }
                | Command::FormSubmit { .. }
        )
    }
}

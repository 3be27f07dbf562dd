//! Add/edit form session.
//!
//! The modal dialog that collects record fields is modelled as an explicit
//! state machine:
//!
//! ```text
//!            open_create                submit ok / cancel
//! [Closed] --------------> [Creating] ---------------------> [Closed]
//!     |      open_edit(k)                submit ok / cancel
//!     +------------------> [Editing k] --------------------> [Closed]
//! ```
//!
//! A failed submit leaves the session in its current mode with the submitted
//! values kept, so the user can correct them. While editing, the registration
//! number is locked to the key the session was opened with.

use crate::notify::{self, Notification};
use crate::{Error, Result};
use roster_core::{Field, Record, RecordChanges, RegistrationNumber};
use roster_engine::RecordStore;
use serde::{Deserialize, Serialize};

const PLEASE_ENTER_NAME: &str = "Please enter name";
const PLEASE_ENTER_DESIGNATION: &str = "Please enter designation";
const PLEASE_ENTER_REG_NO: &str = "Please enter reg no";
const REG_NO_NOT_A_NUMBER: &str = "Reg No must be a whole number";
const REG_NO_LOCKED: &str = "Reg No cannot be changed";

/// Which dialog, if any, is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormMode {
    /// No dialog
    #[default]
    Closed,
    /// Adding a new record
    Creating,
    /// Editing the record with this key
    Editing {
        /// Key of the record under edit
        key: RegistrationNumber,
    },
}

/// Raw field text as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormValues {
    /// Name input
    pub name: String,
    /// Designation input
    pub designation: String,
    /// Registration number input, parsed on submit
    pub registration_number: String,
}

impl FormValues {
    /// Build form values from text
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        registration_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
            registration_number: registration_number.into(),
        }
    }
}

impl From<&Record> for FormValues {
    fn from(record: &Record) -> Self {
        Self::new(
            record.name.clone(),
            record.designation.clone(),
            record.registration_number.to_string(),
        )
    }
}

/// Snapshot of the dialog for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// Current mode
    pub mode: FormMode,
    /// Dialog title
    pub title: String,
    /// Label of the confirm button
    pub submit_label: String,
    /// Field contents
    pub values: FormValues,
    /// Whether the registration number input is read-only
    pub key_locked: bool,
}

/// State of the add/edit dialog
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    mode: FormMode,
    values: FormValues,
}

impl FormSession {
    /// Closed session with blank fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether a dialog is showing
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Render the current state
    pub fn view(&self) -> FormView {
        let editing = matches!(self.mode, FormMode::Editing { .. });
        FormView {
            mode: self.mode,
            title: if editing { "Edit User" } else { "Add User" }.to_string(),
            submit_label: if editing { "Update" } else { "Add" }.to_string(),
            values: self.values.clone(),
            key_locked: editing,
        }
    }

    /// Open a blank add dialog
    pub fn open_create(&mut self) -> FormView {
        self.mode = FormMode::Creating;
        self.values = FormValues::default();
        self.view()
    }

    /// Open the edit dialog for `key`, prefilled from the stored record
    pub fn open_edit(&mut self, store: &RecordStore, key: RegistrationNumber) -> Result<FormView> {
        let record = store.get(key).ok_or(Error::NotFound { key })?;
        self.values = FormValues::from(record);
        self.mode = FormMode::Editing { key };
        Ok(self.view())
    }

    /// Close the dialog and clear its fields
    pub fn cancel(&mut self) -> FormView {
        self.reset();
        self.view()
    }

    /// Validate `values` and apply them to `store`
    ///
    /// Creating inserts a new record; editing updates the record the session
    /// was opened for. On success the dialog closes and a notification is
    /// returned. On failure the dialog stays open holding `values`.
    pub fn submit(&mut self, store: &mut RecordStore, values: FormValues) -> Result<Notification> {
        if !self.is_open() {
            return Err(Error::FormNotOpen);
        }
        self.values = values;

        let outcome = self.apply(store);
        match &outcome {
            Ok(note) => {
                tracing::info!(target: "roster::form", mode = ?self.mode, notification = %note, "form submitted");
                self.reset();
            }
            Err(e) => {
                tracing::debug!(target: "roster::form", mode = ?self.mode, error = %e, "form rejected");
            }
        }
        outcome
    }

    fn apply(&self, store: &mut RecordStore) -> Result<Notification> {
        let (name, designation, key) = self.checked_values()?;
        match self.mode {
            FormMode::Creating => {
                store.insert(Record::new(name, designation, key))?;
                Ok(Notification::success(notify::USER_ADDED))
            }
            FormMode::Editing { key: editing } => {
                if key != editing {
                    return Err(Error::validation(Field::RegistrationNumber, REG_NO_LOCKED));
                }
                store.update(editing, RecordChanges::new(name, designation))?;
                Ok(Notification::success(notify::USER_UPDATED))
            }
            FormMode::Closed => Err(Error::FormNotOpen),
        }
    }

    /// Required-field checks in form order, then reg no parsing
    fn checked_values(&self) -> Result<(String, String, RegistrationNumber)> {
        let v = &self.values;
        if v.name.trim().is_empty() {
            return Err(Error::validation(Field::Name, PLEASE_ENTER_NAME));
        }
        if v.designation.trim().is_empty() {
            return Err(Error::validation(Field::Designation, PLEASE_ENTER_DESIGNATION));
        }
        if v.registration_number.trim().is_empty() {
            return Err(Error::validation(
                Field::RegistrationNumber,
                PLEASE_ENTER_REG_NO,
            ));
        }
        let key = v
            .registration_number
            .parse::<RegistrationNumber>()
            .map_err(|_| Error::validation(Field::RegistrationNumber, REG_NO_NOT_A_NUMBER))?;
        Ok((v.name.clone(), v.designation.clone(), key))
    }

    fn reset(&mut self) {
        self.mode = FormMode::Closed;
        self.values = FormValues::default();
    }
}

//! Form operations: open, cancel, view, submit.

use super::Roster;
use crate::form::{FormValues, FormView};
use crate::notify::{self, Notification};
use crate::{Command, Error, Output, Result};
use roster_core::RegistrationNumber;

impl Roster {
    // =========================================================================
    // Form Operations (5)
    // =========================================================================

    /// Open a blank add dialog.
    pub fn open_create(&mut self) -> Result<FormView> {
        match self.execute(Command::FormOpenCreate)? {
            Output::Form(view) => Ok(view),
            _ => Err(Error::unexpected("FormOpenCreate")),
        }
    }

    /// Open the edit dialog for the record with `key`.
    pub fn open_edit(&mut self, key: RegistrationNumber) -> Result<FormView> {
        match self.execute(Command::FormOpenEdit { key })? {
            Output::Form(view) => Ok(view),
            _ => Err(Error::unexpected("FormOpenEdit")),
        }
    }

    /// Close the dialog without saving.
    pub fn cancel(&mut self) -> Result<FormView> {
        match self.execute(Command::FormCancel)? {
            Output::Form(view) => Ok(view),
            _ => Err(Error::unexpected("FormCancel")),
        }
    }

    /// Current dialog state.
    pub fn form_view(&mut self) -> Result<FormView> {
        match self.execute(Command::FormView)? {
            Output::Form(view) => Ok(view),
            _ => Err(Error::unexpected("FormView")),
        }
    }

    /// Submit the open dialog.
    pub fn submit(&mut self, values: FormValues) -> Result<Notification> {
        match self.execute(Command::FormSubmit { values })? {
            Output::Notification(note) => Ok(note),
            _ => Err(Error::unexpected("FormSubmit")),
        }
    }

    /// Delete from a row action and report it the way the grid does.
    ///
    /// Always succeeds; deleting a missing row still shows the delete message.
    pub fn delete_row(&mut self, key: RegistrationNumber) -> Notification {
        match self.delete(key) {
            Ok(_) => Notification::success(notify::USER_DELETED),
            Err(e) => Notification::from_error(&e),
        }
    }
}

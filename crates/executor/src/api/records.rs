//! Record operations: insert, update, delete, list, get.

use super::Roster;
use crate::{Command, Error, Output, Result};
use roster_core::{Record, RecordChanges, RegistrationNumber};

impl Roster {
    // =========================================================================
    // Record Operations (5)
    // =========================================================================

    /// Append a record.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        match self.execute(Command::RecordInsert { record })? {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected("RecordInsert")),
        }
    }

    /// Change name and designation of the record with `key`.
    pub fn update(&mut self, key: RegistrationNumber, changes: RecordChanges) -> Result<()> {
        match self.execute(Command::RecordUpdate { key, changes })? {
            Output::Unit => Ok(()),
            _ => Err(Error::unexpected("RecordUpdate")),
        }
    }

    /// Remove the record with `key`. Returns whether one existed.
    pub fn delete(&mut self, key: RegistrationNumber) -> Result<bool> {
        match self.execute(Command::RecordDelete { key })? {
            Output::Bool(existed) => Ok(existed),
            _ => Err(Error::unexpected("RecordDelete")),
        }
    }

    /// All records in display order.
    pub fn list(&mut self) -> Result<Vec<Record>> {
        match self.execute(Command::RecordList)? {
            Output::Records(records) => Ok(records),
            _ => Err(Error::unexpected("RecordList")),
        }
    }

    /// The record with `key`, if any.
    pub fn get(&mut self, key: RegistrationNumber) -> Result<Option<Record>> {
        match self.execute(Command::RecordGet { key })? {
            Output::MaybeRecord(record) => Ok(record),
            _ => Err(Error::unexpected("RecordGet")),
        }
    }

    /// Borrow the records without copying.
    pub fn records(&self) -> &[Record] {
        self.executor().store().list()
    }
}

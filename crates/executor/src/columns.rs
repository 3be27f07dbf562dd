//! Grid column definitions.
//!
//! The grid renderer draws one column per [`Column`] and an actions column
//! whose buttons emit [`RowAction`] intents. Intents are turned into commands
//! addressed by registration number, so the renderer never mutates rows itself.

use crate::Command;
use roster_core::{Field, Record, RegistrationNumber};
use serde::{Deserialize, Serialize};

/// Column width policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Width {
    /// Share remaining space with other flexible columns
    Flex(u16),
    /// Fixed width in pixels
    Fixed(u16),
}

/// One data column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Record field shown in this column
    pub field: Field,
    /// Header text
    pub header: &'static str,
    /// Width policy
    pub width: Width,
}

/// Data columns, in display order
pub const COLUMNS: [Column; 3] = [
    Column {
        field: Field::Name,
        header: "Name",
        width: Width::Flex(1),
    },
    Column {
        field: Field::Designation,
        header: "Designation",
        width: Width::Flex(1),
    },
    Column {
        field: Field::RegistrationNumber,
        header: "Reg No",
        width: Width::Fixed(100),
    },
];

/// Header text for `field`
pub fn header(field: Field) -> &'static str {
    match field {
        Field::Name => COLUMNS[0].header,
        Field::Designation => COLUMNS[1].header,
        Field::RegistrationNumber => COLUMNS[2].header,
    }
}

impl Column {
    /// Cell text for `record`
    pub fn cell(&self, record: &Record) -> String {
        match self.field {
            Field::Name => record.name.clone(),
            Field::Designation => record.designation.clone(),
            Field::RegistrationNumber => record.registration_number.to_string(),
        }
    }
}

/// Intent emitted by a row's action buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAction {
    /// Open the edit form for the row
    Edit,
    /// Remove the row
    Delete,
}

impl RowAction {
    /// Command the presentation layer forwards for this intent on row `key`
    pub fn command(self, key: RegistrationNumber) -> Command {
        match self {
            RowAction::Edit => Command::FormOpenEdit { key },
            RowAction::Delete => Command::RecordDelete { key },
        }
    }
}

//! Record types
//!
//! A [`Record`] is one user entry. Its [`RegistrationNumber`] is the identity
//! key: unique within a store and fixed once the record exists. The fields a
//! caller may change after creation are carried separately in
//! [`RecordChanges`], so an update has no way to express a new key.

use crate::error::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity key of a record
///
/// # Examples
///
/// ```
/// use roster_core::RegistrationNumber;
///
/// let key: RegistrationNumber = "205".parse().unwrap();
/// assert_eq!(key, RegistrationNumber::new(205));
/// assert_eq!(key.to_string(), "205");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationNumber(i64);

impl RegistrationNumber {
    /// Wrap a raw registration number
    pub const fn new(value: i64) -> Self {
        RegistrationNumber(value)
    }

    /// The raw integer value
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RegistrationNumber {
    fn from(value: i64) -> Self {
        RegistrationNumber(value)
    }
}

impl fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegistrationNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(RegistrationNumber)
    }
}

/// Addressable record fields, used to attribute validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `Record::name`
    Name,
    /// `Record::designation`
    Designation,
    /// `Record::registration_number`
    RegistrationNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Designation => "designation",
            Field::RegistrationNumber => "registration number",
        };
        f.write_str(label)
    }
}

/// One user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name, never blank
    pub name: String,
    /// Job title, never blank
    pub designation: String,
    /// Identity key
    pub registration_number: RegistrationNumber,
}

impl Record {
    /// Create a record. Does not validate; see [`Record::validate`].
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        registration_number: impl Into<RegistrationNumber>,
    ) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
            registration_number: registration_number.into(),
        }
    }

    /// Identity key of this record
    pub fn key(&self) -> RegistrationNumber {
        self.registration_number
    }

    /// Check that the required text fields are present
    ///
    /// Name is checked before designation; the first failure is returned.
    pub fn validate(&self) -> RosterResult<()> {
        require_text(Field::Name, &self.name)?;
        require_text(Field::Designation, &self.designation)
    }

    /// The mutable part of this record
    pub fn changes(&self) -> RecordChanges {
        RecordChanges {
            name: self.name.clone(),
            designation: self.designation.clone(),
        }
    }

    /// Overwrite the mutable fields, keeping the key
    pub fn apply(&mut self, changes: RecordChanges) {
        self.name = changes.name;
        self.designation = changes.designation;
    }
}

/// Replacement values for the mutable fields of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChanges {
    /// New display name
    pub name: String,
    /// New job title
    pub designation: String,
}

impl RecordChanges {
    /// Create a change set
    pub fn new(name: impl Into<String>, designation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
        }
    }

    /// Same rules as [`Record::validate`]
    pub fn validate(&self) -> RosterResult<()> {
        require_text(Field::Name, &self.name)?;
        require_text(Field::Designation, &self.designation)
    }
}

fn require_text(field: Field, value: &str) -> RosterResult<()> {
    if value.trim().is_empty() {
        return Err(RosterError::validation(field, "must not be empty"));
    }
    Ok(())
}

//! Core types for the roster store
//!
//! This crate defines the data model shared by every other layer:
//! - Record: one user entry (name, designation, registration number)
//! - RegistrationNumber: the identity key of a record
//! - RecordChanges: the mutable subset of a record
//! - RosterError: the error model for all store operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;

pub use error::{ErrorKind, RosterError, RosterResult};
pub use record::{Field, Record, RecordChanges, RegistrationNumber};

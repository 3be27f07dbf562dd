//! Error model for roster operations
//!
//! Every failure is a pure rejection: the store is never left partially
//! mutated, so callers can report the error and carry on.
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Blank name or designation | `Validation` |
//! | Insert with a key already present | `DuplicateKey` |
//! | Update addressed to an absent key | `NotFound` |

use crate::record::{Field, RegistrationNumber};
use thiserror::Error;

/// Result alias used throughout the roster crates
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors produced by record store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A required field is missing or malformed
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field that failed validation
        field: Field,
        /// Human-readable reason, suitable for showing next to the field
        reason: String,
    },

    /// Insert would collide with an existing registration number
    #[error("registration number {key} already exists")]
    DuplicateKey {
        /// The colliding key
        key: RegistrationNumber,
    },

    /// No record carries the requested registration number
    #[error("no record with registration number {key}")]
    NotFound {
        /// The key that was looked up
        key: RegistrationNumber,
    },
}

/// Error category, for callers that only branch on the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`RosterError::Validation`]
    Validation,
    /// See [`RosterError::DuplicateKey`]
    DuplicateKey,
    /// See [`RosterError::NotFound`]
    NotFound,
}

impl RosterError {
    /// Build a validation error for `field`
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        RosterError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Validation { .. } => ErrorKind::Validation,
            RosterError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            RosterError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let key = RegistrationNumber::new(7);
        assert_eq!(
            RosterError::validation(Field::Name, "required").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            RosterError::DuplicateKey { key }.kind(),
            ErrorKind::DuplicateKey
        );
        assert_eq!(RosterError::NotFound { key }.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_display_messages() {
        let key = RegistrationNumber::new(205);
        assert_eq!(
            RosterError::DuplicateKey { key }.to_string(),
            "registration number 205 already exists"
        );
        assert_eq!(
            RosterError::NotFound { key }.to_string(),
            "no record with registration number 205"
        );
        assert_eq!(
            RosterError::validation(Field::Designation, "must not be empty").to_string(),
            "invalid designation: must not be empty"
        );
    }
}

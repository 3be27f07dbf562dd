//! Executor error type.
//!
//! Every command returns `Result<Output, Error>`. Variants carry enough
//! detail for the presentation layer to build a user-facing notification
//! (see [`crate::Notification::from_error`]).

use roster_core::{Field, RegistrationNumber};
use thiserror::Error;

/// Errors returned by the executor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field is missing or malformed. `reason` is ready to show
    /// next to the field.
    #[error("{reason}")]
    Validation {
        /// Offending field
        field: Field,
        /// User-facing reason
        reason: String,
    },

    /// Insert would reuse an existing registration number
    #[error("registration number {key} already exists")]
    DuplicateKey {
        /// The colliding key
        key: RegistrationNumber,
    },

    /// No record carries the key
    #[error("no record with registration number {key}")]
    NotFound {
        /// The key that was looked up
        key: RegistrationNumber,
    },

    /// A form command arrived while no form was open
    #[error("no form is open")]
    FormNotOpen,

    /// The executor produced an output the caller did not expect
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the mismatch
        reason: String,
    },
}

impl Error {
    /// Build a validation error
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unexpected(command: &str) -> Self {
        Error::Internal {
            reason: format!("Unexpected output for {}", command),
        }
    }
}

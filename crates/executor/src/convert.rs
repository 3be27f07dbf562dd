//! Error conversion from the core error type.
//!
//! Maps [`RosterError`] onto the executor's [`Error`], rewriting validation
//! reasons so they name the field the way the grid headers do.

use crate::columns::header;
use crate::Error;
use roster_core::RosterError;

impl From<RosterError> for Error {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Validation { field, reason } => Error::Validation {
                field,
                reason: format!("{} {}", header(field), reason),
            },
            RosterError::DuplicateKey { key } => Error::DuplicateKey { key },
            RosterError::NotFound { key } => Error::NotFound { key },
        }
    }
}

/// Convert a core result into an executor result.
pub(crate) fn convert_result<T>(r: roster_core::RosterResult<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{Field, RegistrationNumber};

    #[test]
    fn test_validation_reason_names_field() {
        let err = Error::from(RosterError::validation(Field::Name, "must not be empty"));
        assert_eq!(
            err,
            Error::Validation {
                field: Field::Name,
                reason: "Name must not be empty".into(),
            }
        );
        assert_eq!(err.to_string(), "Name must not be empty");
    }

    #[test]
    fn test_key_errors_preserved() {
        let key = RegistrationNumber::new(9);
        assert_eq!(
            Error::from(RosterError::DuplicateKey { key }),
            Error::DuplicateKey { key }
        );
        assert_eq!(
            Error::from(RosterError::NotFound { key }),
            Error::NotFound { key }
        );
    }
}

//! Transient user notifications.
//!
//! The store itself produces no UI output. Results coming back from the
//! executor are translated here into the short toast messages the grid shows.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown after a successful insert
pub const USER_ADDED: &str = "User added!";
/// Shown after a successful update
pub const USER_UPDATED: &str = "User updated!";
/// Shown after a delete, whether or not a row matched
pub const USER_DELETED: &str = "User deleted";
/// Shown when an insert reuses a registration number
pub const REG_NO_EXISTS: &str = "Reg No already exists!";
/// Shown when an edit targets a row that no longer exists
pub const USER_NOT_FOUND: &str = "User not found";
/// Shown when a form is submitted with no form open
pub const NO_FORM_OPEN: &str = "No form is open";

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    /// Operation went through
    Success,
    /// Operation was rejected
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// Message text
    pub message: String,
}

impl Notification {
    /// Success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// Error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Translate an executor error
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Validation { reason, .. } => Self::error(reason.clone()),
            Error::DuplicateKey { .. } => Self::error(REG_NO_EXISTS),
            Error::NotFound { .. } => Self::error(USER_NOT_FOUND),
            Error::FormNotOpen => Self::error(NO_FORM_OPEN),
            Error::Internal { .. } => Self::error(err.to_string()),
        }
    }

    /// Whether this is a success notification
    pub fn is_success(&self) -> bool {
        self.level == Level::Success
    }
}

impl From<&Error> for Notification {
    fn from(err: &Error) -> Self {
        Notification::from_error(err)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

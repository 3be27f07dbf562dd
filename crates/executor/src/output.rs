//! Executor outputs.

use crate::form::FormView;
use crate::notify::Notification;
use roster_core::Record;
use serde::{Deserialize, Serialize};

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No payload
    Unit,
    /// Boolean result (delete: whether a record existed)
    Bool(bool),
    /// Records in display order
    Records(Vec<Record>),
    /// Single record lookup
    MaybeRecord(Option<Record>),
    /// Dialog state after a form command
    Form(FormView),
    /// Message to show after a form submit
    Notification(Notification),
}

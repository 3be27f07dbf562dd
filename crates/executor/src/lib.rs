//! Command execution layer for the roster
//!
//! The presentation layer talks to the store only through this crate:
//! - [`Command`] / [`Output`]: the request and response vocabulary
//! - [`Executor`]: routes commands to the store and the form session
//! - [`Roster`]: typed facade, one method per command
//! - [`FormSession`]: add/edit dialog state machine
//! - [`Notification`]: user-facing messages derived from results
//! - [`columns`]: grid column definitions and row actions

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
pub mod columns;
mod command;
mod convert;
mod error;
mod executor;
pub mod form;
mod handlers;
pub mod notify;
mod output;

pub use api::Roster;
pub use columns::{Column, RowAction, Width, COLUMNS};
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use form::{FormMode, FormSession, FormValues, FormView};
pub use notify::{Level, Notification};
pub use output::Output;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

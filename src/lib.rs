//! rosterdb: an in-memory user roster with a grid-friendly command layer.
//!
//! # Quick start
//!
//! ```
//! use rosterdb::{Record, RecordChanges, RegistrationNumber, Roster};
//!
//! let mut roster = Roster::new(); // demo seed: 205, 195, 123
//! roster.insert(Record::new("Arun", "Lead", 300))?;
//! roster.update(RegistrationNumber::new(195), RecordChanges::new("Suresh K", "CTO"))?;
//! roster.delete(RegistrationNumber::new(123))?;
//!
//! let keys: Vec<i64> = roster.list()?.iter().map(|r| r.key().get()).collect();
//! assert_eq!(keys, vec![205, 195, 300]);
//! # Ok::<(), rosterdb::Error>(())
//! ```

pub mod types;

pub use roster_executor::{Command, Error, Executor, Output, Result, Roster};
pub use types::*;

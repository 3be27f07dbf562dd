//! Public types for the roster API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Data model
// ============================================================================

pub use roster_core::{Field, Record, RecordChanges, RegistrationNumber};

// Core error model (store-level)
pub use roster_core::{ErrorKind, RosterError};

// ============================================================================
// Engine
// ============================================================================

pub use roster_engine::{ConfigError, RecordStore, RosterConfig, CONFIG_FILE_NAME};

// ============================================================================
// Presentation contract
// ============================================================================

pub use roster_executor::{
    Column, FormMode, FormValues, FormView, Level, Notification, RowAction, Width, COLUMNS,
};

//! Record command handlers.
//!
//! Thin dispatch from commands to [`RecordStore`] operations, converting core
//! errors on the way out.

use roster_core::{Record, RecordChanges, RegistrationNumber};
use roster_engine::RecordStore;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle RecordInsert command.
pub fn record_insert(store: &mut RecordStore, record: Record) -> Result<Output> {
    convert_result(store.insert(record))?;
    Ok(Output::Unit)
}

/// Handle RecordUpdate command.
pub fn record_update(
    store: &mut RecordStore,
    key: RegistrationNumber,
    changes: RecordChanges,
) -> Result<Output> {
    convert_result(store.update(key, changes))?;
    Ok(Output::Unit)
}

/// Handle RecordDelete command.
pub fn record_delete(store: &mut RecordStore, key: RegistrationNumber) -> Result<Output> {
    let existed = convert_result(store.delete(key))?;
    Ok(Output::Bool(existed))
}

/// Handle RecordList command.
pub fn record_list(store: &RecordStore) -> Result<Output> {
    Ok(Output::Records(store.list().to_vec()))
}

/// Handle RecordGet command.
pub fn record_get(store: &RecordStore, key: RegistrationNumber) -> Result<Output> {
    Ok(Output::MaybeRecord(store.get(key).cloned()))
}

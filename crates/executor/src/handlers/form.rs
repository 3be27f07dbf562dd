//! Form command handlers.

use roster_core::RegistrationNumber;
use roster_engine::RecordStore;

use crate::form::{FormSession, FormValues};
use crate::{Output, Result};

/// Handle FormOpenCreate command.
pub fn form_open_create(form: &mut FormSession) -> Result<Output> {
    Ok(Output::Form(form.open_create()))
}

/// Handle FormOpenEdit command.
pub fn form_open_edit(
    form: &mut FormSession,
    store: &RecordStore,
    key: RegistrationNumber,
) -> Result<Output> {
    Ok(Output::Form(form.open_edit(store, key)?))
}

/// Handle FormCancel command.
pub fn form_cancel(form: &mut FormSession) -> Result<Output> {
    Ok(Output::Form(form.cancel()))
}

/// Handle FormView command.
pub fn form_view(form: &FormSession) -> Result<Output> {
    Ok(Output::Form(form.view()))
}

/// Handle FormSubmit command.
pub fn form_submit(
    form: &mut FormSession,
    store: &mut RecordStore,
    values: FormValues,
) -> Result<Output> {
    Ok(Output::Notification(form.submit(store, values)?))
}

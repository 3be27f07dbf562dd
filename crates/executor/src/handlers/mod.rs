//! Command handlers, one module per command family.

pub mod form;
pub mod records;

//! Read-only views over application state.

pub mod entry;
pub mod log;

//! Pane renderers.

pub mod entry;
pub mod log;

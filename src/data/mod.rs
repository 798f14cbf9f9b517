//! Pure data types: layout, theme, log, entry and window state.

pub mod effect;
pub mod entry;
pub mod layout;
pub mod log;
pub mod scroll;
pub mod state;
pub mod theme;

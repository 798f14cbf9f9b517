//! Pure state transitions driven by UI events.

pub mod scroll;
pub mod ui;

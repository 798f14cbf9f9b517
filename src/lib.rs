//! overkill-gui — a terminal chat window over a peer process's stdio.
//!
//! Peer output is pumped into a scrollback log without blocking the event
//! loop; submitted lines are echoed into the log and written to the peer.

pub mod actions;
pub mod config;
pub mod data;
pub mod error;
pub mod handles;
pub mod queries;
pub mod transforms;
pub mod ui;

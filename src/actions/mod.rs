//! Side-effecting operations: peer streams, the pump, the forwarder, files.

pub mod files;
pub mod forward;
pub mod pump;
pub mod stream;

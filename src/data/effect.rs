//! Side-effect descriptions returned by transforms.

/// Effects that the UI layer should execute.
/// Transforms return these instead of performing side effects directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Forward the entry text to the peer.
    Submit,
    /// Close the window and quit the application.
    Quit,
}

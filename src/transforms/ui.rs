//! Transforms for window-level UI state.

use crate::data::state::AppState;

/// Close the window.
pub fn request_quit(state: &mut AppState) {
    state.should_quit = true;
}

/// Insert pasted text into the entry, dropping line breaks.
pub fn paste(state: &mut AppState, text: &str) {
    let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    state.entry.insert_str(&line);
}

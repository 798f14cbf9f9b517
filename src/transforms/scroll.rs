//! Transforms for the log's scroll position.

use crate::data::state::AppState;
use crate::handles::ScrollController;

/// Record the log pane's inner size; a changed size re-pins to the bottom.
pub fn resize_viewport(state: &mut AppState, width: u16, height: u16) {
    if (state.scroll.width(), state.scroll.height()) == (width, height) {
        return;
    }
    state.scroll.set_viewport(width, height);
    state.scroll.scroll_to_bottom();
}

/// Scroll up by one viewport.
pub fn page_up(state: &mut AppState) {
    let page = (state.scroll.height() as usize).max(1);
    let offset = state.scroll.offset.saturating_sub(page);
    state.scroll.set_offset(offset);
}

/// Scroll down by one viewport, stopping at the bottom.
pub fn page_down(state: &mut AppState) {
    let page = (state.scroll.height() as usize).max(1);
    let offset = state.scroll.offset + page;
    state.scroll.set_offset(offset);
}

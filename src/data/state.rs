//! Pure data types for application state.

use super::entry::EntryBuffer;
use super::layout::ResolvedLayout;
use super::log::ScrollbackLog;
use super::scroll::ScrollContainer;
use super::theme::Palette;
use crate::handles::{EntrySource, LogSink, ScrollController, UiHandles};

/// State of the chat window: the resolved widgets plus quit flag.
pub struct AppState {
    pub layout: ResolvedLayout,
    pub palette: Palette,
    /// Scroll container; owns the scrollback log.
    pub scroll: ScrollContainer,
    pub entry: EntryBuffer,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(layout: ResolvedLayout, palette: Palette) -> Self {
        Self {
            layout,
            palette,
            scroll: ScrollContainer::new(ScrollbackLog::new()),
            entry: EntryBuffer::new(),
            should_quit: false,
        }
    }

    pub fn log(&self) -> &ScrollbackLog {
        &self.scroll.child
    }
}

impl UiHandles for AppState {
    fn log_sink(&mut self) -> &mut dyn LogSink {
        &mut self.scroll.child
    }

    fn entry_source(&mut self) -> &mut dyn EntrySource {
        &mut self.entry
    }

    fn scroll_controller(&mut self) -> &mut dyn ScrollController {
        &mut self.scroll
    }
}

#[cfg(test)]
pub(crate) fn make_state() -> AppState {
    AppState::new(
        ResolvedLayout {
            window_title: "Overkill Chat".to_string(),
            log_title: None,
            entry_title: None,
            placeholder: None,
            entry_height: 3,
        },
        Palette::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::append_and_pin;

    #[test]
    fn test_new_state_is_empty() {
        let state = make_state();
        assert!(state.log().is_empty());
        assert!(state.entry.is_empty());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_handles_reach_the_same_log() {
        let mut state = make_state();
        state.scroll.set_viewport(10, 2);
        append_and_pin(&mut state, "1\n2\n3\n4\n");
        assert_eq!(state.log().contents(), "1\n2\n3\n4\n");
        assert_eq!(state.scroll.offset, 3);
    }

    #[test]
    fn test_entry_source_clears_entry() {
        let mut state = make_state();
        state.entry.insert_str("hello");
        state.entry_source().clear();
        assert!(state.entry.is_empty());
    }
}

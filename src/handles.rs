//! Capability interface between the stdio pump and the chat window.
//!
//! The pump and the forwarder only see these traits. `AppState` implements
//! them over the ratatui state; tests implement them with plain recorders.

/// Append-only text sink (the scrollback log).
pub trait LogSink {
    fn append(&mut self, text: &str);
}

/// The single-line input the user submits from.
pub trait EntrySource {
    fn text(&self) -> &str;
    fn clear(&mut self);
}

/// Vertical scroll position of the container wrapping the log.
pub trait ScrollController {
    /// Total rows of content.
    fn content_extent(&self) -> usize;
    /// Rows visible in the viewport.
    fn viewport_extent(&self) -> usize;
    fn offset(&self) -> usize;
    fn set_offset(&mut self, offset: usize);

    /// Largest offset that still fills the viewport.
    fn max_offset(&self) -> usize {
        self.content_extent().saturating_sub(self.viewport_extent())
    }

    /// Pin the view to the newest content.
    fn scroll_to_bottom(&mut self) {
        let bottom = self.max_offset();
        self.set_offset(bottom);
    }
}

/// Resolved UI handles handed to the pump and the forwarder.
pub trait UiHandles {
    fn log_sink(&mut self) -> &mut dyn LogSink;
    fn entry_source(&mut self) -> &mut dyn EntrySource;
    fn scroll_controller(&mut self) -> &mut dyn ScrollController;
}

/// Append `text` to the log and pin the view to the bottom.
pub fn append_and_pin<U: UiHandles + ?Sized>(ui: &mut U, text: &str) {
    ui.log_sink().append(text);
    ui.scroll_controller().scroll_to_bottom();
}


#[cfg(test)]
mod tests {
    use super::mock::MockUi;
    use super::*;

    #[test]
    fn test_append_and_pin_scrolls_to_bottom() {
        let mut ui = MockUi::default();
        append_and_pin(&mut ui, "a\nb\nc\nd\ne\n");
        assert_eq!(ui.log.contents(), "a\nb\nc\nd\ne\n");
        // 6 rows (5 lines + open line) in a 3 row viewport
        assert_eq!(ui.scroll.offset, 3);
        assert_eq!(ui.scroll.offset, ui.scroll.max_offset());
    }

    #[test]
    fn test_scroll_to_bottom_short_content_stays_at_zero() {
        let mut ui = MockUi::default();
        append_and_pin(&mut ui, "one line");
        assert_eq!(ui.scroll.offset, 0);
    }
}

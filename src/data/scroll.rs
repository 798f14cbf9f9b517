//! Scroll container wrapping the scrollback log.

use super::log::{ScrollbackLog, DEFAULT_WRAP_WIDTH};
use crate::handles::ScrollController;

/// The log plus the viewport it is shown through.
///
/// The viewport is the inner size of the log pane, recorded every draw. Its
/// width is the log's wrap width.
#[derive(Debug, Clone)]
pub struct ScrollContainer {
    pub child: ScrollbackLog,
    pub offset: usize,
    height: u16,
}

impl ScrollContainer {
    pub fn new(mut child: ScrollbackLog) -> Self {
        child.set_wrap_width(DEFAULT_WRAP_WIDTH);
        Self {
            child,
            offset: 0,
            height: 20,
        }
    }

    pub fn width(&self) -> u16 {
        self.child.wrap_width()
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Record a new viewport size. Does not move the offset.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.child.set_wrap_width(width);
        self.height = height;
    }

    /// Whether the view currently shows the newest row.
    pub fn is_pinned(&self) -> bool {
        self.offset >= self.max_offset()
    }
}

impl ScrollController for ScrollContainer {
    fn content_extent(&self) -> usize {
        self.child.total_rows()
    }

    fn viewport_extent(&self) -> usize {
        self.height as usize
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::LogSink;

    fn container(height: u16) -> ScrollContainer {
        let mut scroll = ScrollContainer::new(ScrollbackLog::new());
        scroll.set_viewport(20, height);
        scroll
    }

    #[test]
    fn test_scroll_to_bottom_pins_offset() {
        let mut scroll = container(3);
        scroll.child.append("1\n2\n3\n4\n5\n");
        scroll.scroll_to_bottom();
        // 6 rows (five lines and the open line) through 3 visible rows
        assert_eq!(scroll.offset, 3);
        assert_eq!(
            scroll.offset,
            scroll.content_extent() - scroll.viewport_extent()
        );
        assert!(scroll.is_pinned());
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = container(10);
        scroll.child.append("hi\n");
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_set_offset_clamps_to_max() {
        let mut scroll = container(2);
        scroll.child.append("a\nb\nc\nd");
        scroll.set_offset(100);
        assert_eq!(scroll.offset, 2);
    }

    #[test]
    fn test_unpinned_after_scrolling_up() {
        let mut scroll = container(2);
        scroll.child.append("a\nb\nc\nd");
        scroll.scroll_to_bottom();
        scroll.set_offset(0);
        assert!(!scroll.is_pinned());
    }

    #[test]
    fn test_narrower_viewport_grows_extent() {
        let mut scroll = container(2);
        scroll.child.append("alpha beta gamma");
        assert_eq!(scroll.content_extent(), 1);
        scroll.set_viewport(10, 2);
        assert_eq!(scroll.content_extent(), 2);
        assert_eq!(scroll.width(), 10);
    }
}

//! Single-line entry buffer.

use crate::handles::EntrySource;

/// Text typed by the user, with a cursor counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
    cursor: usize,
}

impl EntryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl EntrySource for EntryBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn clear(&mut self) {
        EntryBuffer::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut entry = EntryBuffer::new();
        entry.insert_str("pig");
        entry.move_left();
        entry.insert('n');
        assert_eq!(entry.as_str(), "ping");
        assert_eq!(entry.cursor(), 3);
        entry.move_end();
        entry.move_left();
        entry.move_left();
        entry.backspace();
        assert_eq!(entry.as_str(), "png");
        assert_eq!(entry.cursor(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut entry = EntryBuffer::new();
        entry.insert_str("héllo");
        entry.move_home();
        entry.move_right();
        entry.delete();
        assert_eq!(entry.as_str(), "hllo");
        entry.insert('é');
        assert_eq!(entry.as_str(), "héllo");
        assert_eq!(entry.before_cursor(), "hé");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut entry = EntryBuffer::new();
        entry.insert('a');
        entry.move_home();
        entry.backspace();
        assert_eq!(entry.as_str(), "a");
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut entry = EntryBuffer::new();
        entry.insert_str("ab");
        entry.move_right();
        assert_eq!(entry.cursor(), 2);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut entry = EntryBuffer::new();
        entry.insert_str("hello");
        EntrySource::clear(&mut entry);
        assert!(entry.is_empty());
        assert_eq!(entry.cursor(), 0);
        assert_eq!(entry.text(), "");
    }
}

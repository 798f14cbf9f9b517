//! The scrollback log: an append-only text buffer.

use crate::handles::LogSink;
use crate::queries::log::row_count;

/// Wrap width until the first viewport size is known.
pub const DEFAULT_WRAP_WIDTH: u16 = 80;

/// Append-only chat history, kept as logical lines.
///
/// The last line is always the open line that the next append continues,
/// so a fresh log holds exactly one empty line.
///
/// Display rows are indexed as the log grows: `row_ends[i]` is the number of
/// rows through line `i` at `wrap_width`. An append re-wraps only the open
/// line and the lines it adds; only a width change re-wraps everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackLog {
    lines: Vec<String>,
    row_ends: Vec<usize>,
    wrap_width: u16,
    bytes: usize,
}

impl Default for ScrollbackLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbackLog {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row_ends: vec![1],
            wrap_width: DEFAULT_WRAP_WIDTH,
            bytes: 0,
        }
    }

    /// Append text at the end of the buffer.
    pub fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let open = self.lines.len() - 1;
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.lines[open].push_str(first);
        }
        for part in parts {
            self.lines.push(part.to_string());
        }
        self.bytes += text.len();
        self.index_rows_from(open);
    }

    /// Logical lines, the last one possibly unterminated.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Size of everything appended so far, in bytes.
    pub fn len(&self) -> usize {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// The whole buffer as one string.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    pub fn wrap_width(&self) -> u16 {
        self.wrap_width
    }

    /// Re-wrap the whole log if `width` differs from the current one.
    pub fn set_wrap_width(&mut self, width: u16) {
        if width == self.wrap_width {
            return;
        }
        self.wrap_width = width;
        self.index_rows_from(0);
    }

    /// Display rows of the whole log at the current wrap width.
    pub fn total_rows(&self) -> usize {
        self.row_ends.last().copied().unwrap_or(0)
    }

    /// The logical line holding display row `row`, and the row's index
    /// inside that line. `None` past the end.
    pub fn line_at_row(&self, row: usize) -> Option<(usize, usize)> {
        let index = self.row_ends.partition_point(|&end| end <= row);
        if index >= self.lines.len() {
            return None;
        }
        let start = if index == 0 { 0 } else { self.row_ends[index - 1] };
        Some((index, row - start))
    }

    fn index_rows_from(&mut self, start: usize) {
        self.row_ends.truncate(start);
        let width = self.wrap_width as usize;
        let mut total = self.row_ends.last().copied().unwrap_or(0);
        for line in &self.lines[start..] {
            total += row_count(line, width);
            self.row_ends.push(total);
        }
    }
}

impl LogSink for ScrollbackLog {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

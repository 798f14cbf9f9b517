//! Queries over the entry buffer for rendering.

use unicode_width::UnicodeWidthChar;

use crate::data::entry::EntryBuffer;

/// Portion of the entry that fits in `width` columns with the cursor in view,
/// plus the cursor's column inside that portion.
pub fn visible_entry(entry: &EntryBuffer, width: u16) -> (&str, u16) {
    let text = entry.as_str();
    let width = width.max(1) as usize;
    // Summed per char so it agrees with the skip loop below.
    let cursor_col: usize = entry
        .before_cursor()
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    // Keep one column free for the cursor itself.
    let skip_cols = cursor_col.saturating_sub(width - 1);

    let mut skipped = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if skipped >= skip_cols {
            start = i;
            break;
        }
        skipped += c.width().unwrap_or(0);
        start = i + c.len_utf8();
    }

    (&text[start..], cursor_col.saturating_sub(skipped) as u16)
}

//! Queries over the scrollback log: wrapping and row extents.

use std::borrow::Cow;

use crate::data::log::ScrollbackLog;

fn display_text(line: &str) -> Cow<'_, str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.contains('\t') {
        Cow::Owned(line.replace('\t', "    "))
    } else {
        Cow::Borrowed(line)
    }
}

/// Wrap one logical line into display rows at `width` columns.
///
/// Always yields at least one row, so empty lines still take up space.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let line = display_text(line);
    let rows: Vec<String> = textwrap::wrap(&line, width.max(1))
        .into_iter()
        .map(|row| row.into_owned())
        .collect();
    if rows.is_empty() {
        vec![String::new()]
    } else {
        rows
    }
}

/// Number of rows [`wrap_line`] yields, without building them.
pub fn row_count(line: &str, width: usize) -> usize {
    let line = display_text(line);
    textwrap::wrap(&line, width.max(1)).len().max(1)
}

/// The `height` display rows starting at row `offset`.
///
/// Lines above the offset are skipped through the log's row index, so only
/// the visible lines are wrapped.
pub fn visible_rows(log: &ScrollbackLog, offset: usize, height: u16) -> Vec<String> {
    let height = height as usize;
    let Some((first, mut skip)) = log.line_at_row(offset) else {
        return Vec::new();
    };
    let width = log.wrap_width() as usize;
    let mut rows = Vec::with_capacity(height);

    for line in &log.lines()[first..] {
        if rows.len() >= height {
            break;
        }
        let room = height - rows.len();
        rows.extend(wrap_line(line, width).into_iter().skip(skip).take(room));
        skip = 0;
    }

    rows
}

//! Entry pane rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::state::AppState;
use crate::queries::entry::visible_entry;

/// Draw the entry pane and place the cursor in it.
pub fn draw(frame: &mut Frame, state: &AppState, area: Rect) {
    let palette = state.palette;
    let inner_width = area.width.saturating_sub(2);

    let (content, cursor_x) = match &state.layout.placeholder {
        Some(hint) if state.entry.is_empty() => (
            Line::from(Span::styled(hint.clone(), Style::default().fg(palette.dim))),
            0,
        ),
        _ => {
            let (text, cursor_x) = visible_entry(&state.entry, inner_width);
            (Line::from(text.to_string()), cursor_x)
        }
    };

    let paragraph = Paragraph::new(content).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .title(state.layout.entry_title.clone().unwrap_or_default()),
    );

    frame.render_widget(paragraph, area);

    if area.width > 2 && area.height > 2 {
        frame.set_cursor_position((area.x + 1 + cursor_x.min(inner_width - 1), area.y + 1));
    }
}

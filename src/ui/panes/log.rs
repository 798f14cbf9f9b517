//! Scrollback log pane rendering.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::state::AppState;
use crate::queries::log::visible_rows;

/// Draw the log pane. The viewport size was recorded before drawing.
pub fn draw(frame: &mut Frame, state: &AppState, area: Rect) {
    let palette = state.palette;
    let scroll = &state.scroll;

    let title = match (&state.layout.log_title, scroll.is_pinned()) {
        (Some(title), true) => title.clone(),
        (Some(title), false) => format!("{}(scrolled) ", title),
        (None, true) => String::new(),
        (None, false) => " (scrolled) ".to_string(),
    };

    let content: Vec<Line> = visible_rows(state.log(), scroll.offset, scroll.height())
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(content).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

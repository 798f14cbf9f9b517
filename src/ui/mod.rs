//! UI layer: event loop, key dispatch, and rendering coordination.

pub mod app;
pub mod panes;

use std::fs::File;
use std::io::Write;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::actions::forward::InputForwarder;
use crate::actions::pump::OutputPump;
use crate::data::effect::Effect;
use crate::data::state::AppState;
use crate::error::Result;
use crate::transforms::{scroll, ui as ui_transforms};

/// How long an idle loop iteration waits for terminal input.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Screen regions for one frame.
struct LayoutAreas {
    title_bar: Rect,
    log_pane: Rect,
    entry_pane: Rect,
}

fn layout_areas(area: Rect, entry_height: u16) -> LayoutAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(entry_height),
        ])
        .split(area);

    LayoutAreas {
        title_bar: chunks[0],
        log_pane: chunks[1],
        entry_pane: chunks[2],
    }
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    pump: &mut Option<OutputPump<File>>,
    forwarder: &mut InputForwarder<Box<dyn Write>>,
) -> Result<()> {
    while !state.should_quit {
        let size = terminal.size()?;
        let areas = layout_areas(
            Rect::new(0, 0, size.width, size.height),
            state.layout.entry_height,
        );
        scroll::resize_viewport(
            state,
            areas.log_pane.width.saturating_sub(2),
            areas.log_pane.height.saturating_sub(2),
        );

        terminal.draw(|frame| draw(frame, state, &areas))?;

        // Keep draining without waiting while the peer has more queued.
        let timeout = match pump {
            Some(p) if p.is_backlogged() => Duration::ZERO,
            _ => IDLE_POLL,
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if let Some(effect) = handle_key(state, key.code, key.modifiers) {
                            apply_effect(state, effect, forwarder);
                        }
                    }
                }
                Event::Paste(text) => ui_transforms::paste(state, &text),
                Event::Resize(_, _) => {}
                _ => {}
            }
        } else if let Some(p) = pump {
            if p.drain_and_flush(state).is_break() {
                *pump = None;
            }
        }
    }
    Ok(())
}

fn apply_effect(
    state: &mut AppState,
    effect: Effect,
    forwarder: &mut InputForwarder<Box<dyn Write>>,
) {
    match effect {
        Effect::Submit => {
            // Failures are already shown in the log.
            let _ = forwarder.on_submit(state);
        }
        Effect::Quit => ui_transforms::request_quit(state),
    }
}

/// Map a key press to an entry edit, a scroll, or an effect.
fn handle_key(state: &mut AppState, key: KeyCode, modifiers: KeyModifiers) -> Option<Effect> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Effect::Quit),
            KeyCode::Char('u') => {
                state.entry.clear();
                None
            }
            KeyCode::Char('a') => {
                state.entry.move_home();
                None
            }
            KeyCode::Char('e') => {
                state.entry.move_end();
                None
            }
            _ => None,
        };
    }

    match key {
        KeyCode::Esc => return Some(Effect::Quit),
        KeyCode::Enter => return Some(Effect::Submit),
        KeyCode::Char(c) => state.entry.insert(c),
        KeyCode::Backspace => state.entry.backspace(),
        KeyCode::Delete => state.entry.delete(),
        KeyCode::Left => state.entry.move_left(),
        KeyCode::Right => state.entry.move_right(),
        KeyCode::Home => state.entry.move_home(),
        KeyCode::End => state.entry.move_end(),
        KeyCode::PageUp => scroll::page_up(state),
        KeyCode::PageDown => scroll::page_down(state),
        _ => {}
    }
    None
}

fn draw(frame: &mut Frame, state: &AppState, areas: &LayoutAreas) {
    draw_title_bar(frame, state, areas.title_bar);
    panes::log::draw(frame, state, areas.log_pane);
    panes::entry::draw(frame, state, areas.entry_pane);
}

fn draw_title_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let title = format!(
        " {} │ [Enter] Send │ [PgUp/PgDn] Scroll │ [Esc] Quit ",
        state.layout.window_title
    );
    let paragraph = Paragraph::new(Line::from(title)).style(state.palette.title_bar());
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::state::make_state;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_then_enter_submits() {
        let mut state = make_state();
        for c in "ping".chars() {
            assert_eq!(handle_key(&mut state, KeyCode::Char(c), KeyModifiers::NONE), None);
        }
        assert_eq!(
            handle_key(&mut state, KeyCode::Enter, KeyModifiers::NONE),
            Some(Effect::Submit)
        );
        assert_eq!(state.entry.as_str(), "ping");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = make_state();
        assert_eq!(
            handle_key(&mut state, KeyCode::Esc, KeyModifiers::NONE),
            Some(Effect::Quit)
        );
        assert_eq!(
            handle_key(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Effect::Quit)
        );
        assert!(state.entry.is_empty());
    }

    #[test]
    fn test_submit_effect_echoes_and_clears() {
        let mut state = make_state();
        state.entry.insert_str("hello");
        let mut forwarder: InputForwarder<Box<dyn Write>> =
            InputForwarder::new(Box::new(std::io::sink()));
        apply_effect(&mut state, Effect::Submit, &mut forwarder);
        assert_eq!(state.log().contents(), "hello\n");
        assert!(state.entry.is_empty());
    }

    #[test]
    fn test_enter_on_empty_entry_returns_to_bottom() {
        let mut state = make_state();
        scroll::resize_viewport(&mut state, 20, 3);
        let history: String = (0..10).map(|i| format!("line {}\n", i)).collect();
        crate::handles::append_and_pin(&mut state, &history);
        scroll::page_up(&mut state);
        assert!(!state.scroll.is_pinned());

        let mut forwarder: InputForwarder<Box<dyn Write>> =
            InputForwarder::new(Box::new(std::io::sink()));
        apply_effect(&mut state, Effect::Submit, &mut forwarder);
        assert!(state.scroll.is_pinned());
        assert_eq!(state.log().contents(), history);
    }

    #[test]
    fn test_user_line_precedes_later_peer_output() {
        use std::io::Cursor;

        let mut state = make_state();
        let mut forwarder: InputForwarder<Box<dyn Write>> =
            InputForwarder::new(Box::new(std::io::sink()));
        state.entry.insert_str("A");
        apply_effect(&mut state, Effect::Submit, &mut forwarder);

        let mut pump = OutputPump::new(Cursor::new(b"B\n".to_vec()));
        let _ = pump.drain_and_flush(&mut state);
        assert_eq!(state.log().contents(), "A\nB\n");
    }

    #[test]
    fn test_draw_shows_log_and_title() {
        let mut state = make_state();
        state.entry.insert_str("draft");
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let areas = layout_areas(Rect::new(0, 0, 40, 10), state.layout.entry_height);
        scroll::resize_viewport(&mut state, 38, areas.log_pane.height - 2);
        crate::handles::append_and_pin(&mut state, "Alice: hi\n");

        terminal.draw(|frame| draw(frame, &state, &areas)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..40).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(0).contains("Overkill Chat"));
        assert!((1..7).any(|y| row(y).contains("Alice: hi")));
        assert!(row(8).contains("draft"));
    }
}

//! Application setup, teardown, and main entry point.
//!
//! Stdout may be the peer's stdin, so the UI is drawn on `/dev/tty`.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::actions::forward::InputForwarder;
use crate::actions::pump::OutputPump;
use crate::actions::stream::Peer;
use crate::data::state::AppState;
use crate::error::Result;
use crate::handles::append_and_pin;

/// Run the chat window until it is closed.
pub fn run(state: &mut AppState, peer: &mut Peer, read_capacity: usize) -> Result<()> {
    let mut pump = match peer.output.take() {
        Some(output) => Some(OutputPump::with_capacity(output, read_capacity)),
        None => {
            append_and_pin(state, "[no peer output attached: stdin is a terminal]\n");
            None
        }
    };
    let writer: Box<dyn Write> = match peer.input.take() {
        Some(input) => input,
        None => {
            append_and_pin(state, "[no peer input attached: messages are not sent]\n");
            Box::new(io::sink())
        }
    };
    let mut forwarder = InputForwarder::new(writer);

    // Setup terminal
    let mut tty = OpenOptions::new().read(true).write(true).open("/dev/tty")?;
    enable_raw_mode()?;
    tty.execute(EnterAlternateScreen)?;
    tty.execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(tty))?;
    tracing::info!("chat window open");

    // Main loop
    let result = super::main_loop(&mut terminal, state, &mut pump, &mut forwarder);

    // Restore terminal
    terminal.backend_mut().execute(DisableBracketedPaste)?;
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("chat window closed");

    result
}

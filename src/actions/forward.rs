//! Input forwarder: sends a submitted entry to the peer and echoes it.

use std::io::Write;

use crate::error::{Error, Result};
use crate::handles::{append_and_pin, ScrollController, UiHandles};

/// Terminate non-empty text with exactly one trailing newline.
pub fn normalize(text: &str) -> String {
    let mut message = text.to_string();
    if !message.is_empty() && !message.ends_with('\n') {
        message.push('\n');
    }
    message
}

pub struct InputForwarder<W> {
    writer: W,
}

impl<W: Write> InputForwarder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Echo the entry text into the log, write it to the peer, clear the entry.
    ///
    /// A failed write leaves a notice in the log and is returned; the entry
    /// is cleared either way. An empty entry sends nothing but still pins
    /// the view to the bottom.
    pub fn on_submit<U: UiHandles + ?Sized>(&mut self, ui: &mut U) -> Result<()> {
        let message = normalize(ui.entry_source().text());
        let result = if message.is_empty() {
            ui.scroll_controller().scroll_to_bottom();
            Ok(())
        } else {
            append_and_pin(ui, &message);
            self.send(message.as_bytes())
        };

        if let Err(Error::Forward(e)) = &result {
            tracing::warn!(error = %e, "forwarding message failed");
            append_and_pin(ui, &format!("[send failed: {}]\n", e));
        }

        ui.entry_source().clear();
        result
    }

    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::Forward)?;
        self.writer.flush().map_err(Error::Forward)?;
        tracing::debug!(bytes = bytes.len(), "forwarded message");
        Ok(())
    }
}

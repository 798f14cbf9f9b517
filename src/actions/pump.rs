//! Output pump: drains peer output into the scrollback log.
//!
//! Called from the event loop whenever it is idle. Each call reads whatever
//! is immediately available, up to the read buffer's capacity, and never
//! blocks: the reader must already be in non-blocking mode.

use std::io::{ErrorKind, Read};
use std::ops::ControlFlow;

use crate::handles::{append_and_pin, UiHandles};

/// Default read buffer capacity in bytes.
pub const READ_BUFFER_CAPACITY: usize = 512;

/// Smallest capacity that can always hold one UTF-8 scalar.
const MIN_CAPACITY: usize = 4;

/// Hard read errors in a row before the pump gives up.
pub const MAX_CONSECUTIVE_ERRORS: u32 = 8;

/// Why a drain cycle stopped reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Full,
    WouldBlock,
    Eof,
    Error,
}

pub struct OutputPump<R> {
    reader: R,
    buf: Box<[u8]>,
    len: usize,
    consecutive_errors: u32,
    at_eof: bool,
    backlogged: bool,
}

impl<R: Read> OutputPump<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, READ_BUFFER_CAPACITY)
    }

    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0u8; capacity.max(MIN_CAPACITY)].into_boxed_slice(),
            len: 0,
            consecutive_errors: 0,
            at_eof: false,
            backlogged: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the last cycle stopped on a full buffer, so more output is
    /// probably waiting.
    pub fn is_backlogged(&self) -> bool {
        self.backlogged
    }

    /// Read what is available, append it to the log and pin the view.
    ///
    /// Returns `Continue` to stay scheduled. `Break` only after
    /// [`MAX_CONSECUTIVE_ERRORS`] hard read errors in a row.
    pub fn drain_and_flush<U: UiHandles + ?Sized>(&mut self, ui: &mut U) -> ControlFlow<()> {
        let mut last_error = None;
        let stop = loop {
            if self.len == self.buf.len() {
                break Stop::Full;
            }
            match self.reader.read(&mut self.buf[self.len..]) {
                Ok(0) => break Stop::Eof,
                Ok(n) => {
                    self.len += n;
                    self.consecutive_errors = 0;
                    self.at_eof = false;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::WouldBlock => break Stop::WouldBlock,
                Err(e) => {
                    last_error = Some(e);
                    break Stop::Error;
                }
            }
        };

        match stop {
            Stop::Eof if !self.at_eof => {
                tracing::info!("peer output reached end of stream");
                self.at_eof = true;
            }
            Stop::Error => {
                self.consecutive_errors += 1;
                if let Some(e) = &last_error {
                    tracing::warn!(error = %e, count = self.consecutive_errors, "peer read failed");
                }
            }
            _ => {}
        }

        self.backlogged = stop == Stop::Full;
        let ended = matches!(stop, Stop::Eof | Stop::Error);
        self.flush(ui, ended);

        if self.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
            let reason = last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "read error".to_string());
            append_and_pin(ui, &format!("[peer output lost: {}]\n", reason));
            tracing::error!(%reason, "unscheduling output pump");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    /// Hand the buffered bytes to the log.
    ///
    /// An incomplete UTF-8 sequence at the end is kept for the next cycle
    /// unless the stream `ended`.
    fn flush<U: UiHandles + ?Sized>(&mut self, ui: &mut U, ended: bool) {
        if self.len == 0 {
            return;
        }
        let split = if ended {
            self.len
        } else {
            self.len - incomplete_tail(&self.buf[..self.len])
        };
        if split == 0 {
            return;
        }

        tracing::trace!(bytes = split, "flushing peer output");
        append_and_pin(ui, &String::from_utf8_lossy(&self.buf[..split]));

        self.buf.copy_within(split..self.len, 0);
        self.len -= split;
    }
}

/// Length of an unfinished UTF-8 sequence at the end of `bytes`, or 0.
///
/// Only the last three bytes are examined, so invalid bytes earlier in the
/// chunk do not hide a split character at the end.
fn incomplete_tail(bytes: &[u8]) -> usize {
    let floor = bytes.len().saturating_sub(3);
    for start in (floor..bytes.len()).rev() {
        // Continuation bytes are 0b10xx_xxxx; keep looking for the lead.
        if bytes[start] & 0xC0 == 0x80 {
            continue;
        }
        return match std::str::from_utf8(&bytes[start..]) {
            Err(e) if e.error_len().is_none() => bytes.len() - start,
            _ => 0,
        };
    }
    0
}

//! Peer process endpoints and non-blocking setup.
//!
//! The peer is either attached through our own stdio (shell pipeline or
//! FIFOs) or spawned with piped stdin/stdout.

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::os::fd::{AsFd, AsRawFd, OwnedFd};
use std::process::{Child, Command, Stdio};

use nix::fcntl::{fcntl, FcntlArg, OFlag};

use crate::error::Result;

/// Set or clear `O_NONBLOCK` on a file descriptor.
///
/// The flag lives on the open file description, so it also applies to
/// every duplicate of `fd`.
pub fn set_nonblocking<F: AsRawFd>(fd: &F, nonblocking: bool) -> Result<()> {
    let raw = fd.as_raw_fd();
    let flags = fcntl(raw, FcntlArg::F_GETFL)?;
    let mut flags = OFlag::from_bits_truncate(flags);

    if nonblocking {
        flags.insert(OFlag::O_NONBLOCK);
    } else {
        flags.remove(OFlag::O_NONBLOCK);
    }

    fcntl(raw, FcntlArg::F_SETFL(flags))?;
    Ok(())
}

/// The two ends of the peer we talk to.
pub struct Peer {
    /// Peer stdout, already non-blocking. `None` when nothing is attached.
    pub output: Option<File>,
    /// Peer stdin. `None` when it would write onto the terminal.
    pub input: Option<Box<dyn Write>>,
    child: Option<Child>,
}

impl Peer {
    /// Use our stdin as peer output and our stdout as peer input.
    pub fn from_stdio() -> Result<Self> {
        let output = if io::stdin().is_terminal() {
            tracing::warn!("stdin is a terminal, no peer output attached");
            None
        } else {
            let fd: OwnedFd = io::stdin().as_fd().try_clone_to_owned()?;
            let file = File::from(fd);
            set_nonblocking(&file, true)?;
            Some(file)
        };

        let input: Option<Box<dyn Write>> = if io::stdout().is_terminal() {
            tracing::warn!("stdout is a terminal, outbound messages are dropped");
            None
        } else {
            Some(Box::new(io::stdout()))
        };

        Ok(Self {
            output,
            input,
            child: None,
        })
    }

    /// Spawn `program args...` and talk to it over pipes.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::info!(program, pid = child.id(), "spawned peer");

        let output = match child.stdout.take() {
            Some(stdout) => {
                let file = File::from(OwnedFd::from(stdout));
                set_nonblocking(&file, true)?;
                Some(file)
            }
            None => None,
        };
        let input = child
            .stdin
            .take()
            .map(|stdin| Box::new(stdin) as Box<dyn Write>);

        Ok(Self {
            output,
            input,
            child: Some(child),
        })
    }
}

impl Drop for Peer {
    fn drop(&mut self) {
        // Closing stdin is how a spawned peer learns we are gone.
        self.input.take();
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(Some(status)) => tracing::info!(%status, "peer exited"),
                Ok(None) => tracing::info!(pid = child.id(), "leaving peer running"),
                Err(e) => tracing::warn!(error = %e, "could not query peer"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::os::unix::net::UnixStream;

    #[test]
    fn test_set_nonblocking_read_would_block() {
        let (a, _b) = UnixStream::pair().unwrap();
        set_nonblocking(&a, true).unwrap();
        let mut file = File::from(OwnedFd::from(a));
        let mut buf = [0u8; 8];
        let err = file.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);
    }

    #[test]
    fn test_set_nonblocking_toggles_flag() {
        let (a, _b) = UnixStream::pair().unwrap();
        set_nonblocking(&a, true).unwrap();
        let flags = OFlag::from_bits_truncate(fcntl(a.as_raw_fd(), FcntlArg::F_GETFL).unwrap());
        assert!(flags.contains(OFlag::O_NONBLOCK));
        set_nonblocking(&a, false).unwrap();
        let flags = OFlag::from_bits_truncate(fcntl(a.as_raw_fd(), FcntlArg::F_GETFL).unwrap());
        assert!(!flags.contains(OFlag::O_NONBLOCK));
    }

    #[test]
    fn test_spawn_peer_pipes() {
        let peer = Peer::spawn("cat", &[]).unwrap();
        assert!(peer.output.is_some());
        assert!(peer.input.is_some());
    }

    #[test]
    fn test_spawn_missing_program_is_error() {
        assert!(Peer::spawn("/nonexistent/peer-binary", &[]).is_err());
    }
}

//! Wire encoding for outgoing commands.
//!
//! `Display` renders a [`Command`] without its terminator; this trait
//! appends the CRLF and writes the result to any [`Write`] implementor,
//! so callers can hand the bytes straight to a socket or buffer.

use std::io::{self, Write};

use crate::command::Command;

/// Check if a string needs colon-prefixing as a trailing IRC argument.
#[inline]
pub(crate) fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Encode a protocol element as a complete, CRLF-terminated wire line.
pub trait WireEncode {
    /// Encode this value to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512); // IRC max line length
        let _ = self.encode(&mut buf);
        buf
    }
}

impl WireEncode for Command {
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        let line = self.to_string();
        let mut written = writer.write(line.as_bytes())?;
        written += writer.write(b"\r\n")?;
        Ok(written)
    }
}

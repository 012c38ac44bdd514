//! CTCP (Client-To-Client Protocol) handling.
//!
//! CTCP embeds a command and its arguments inside a `PRIVMSG`/`NOTICE`
//! payload, delimited by byte `0x01`. This module recognizes that envelope
//! during parsing and renders the fixed CTCP `TIME` reply format.

use chrono::NaiveDateTime;

/// The byte delimiting a CTCP envelope inside a message payload.
pub const CTCP_DELIMITER: char = '\u{1}';

/// Whether a parsed message carried a CTCP envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CtcpStatus {
    /// No CTCP framing was present.
    #[default]
    Plain,
    /// The payload carried a well-formed CTCP envelope.
    Ctcp,
    /// The delimiter was present but no usable command could be read.
    Invalid,
}

/// Split a tokenized CTCP payload into its command and joined argument text.
///
/// The first token carries the leading delimiter; every token is truncated
/// at a terminating delimiter and empty fragments are dropped. Returns
/// `None` when nothing usable remains.
pub(crate) fn extract(tokens: &[String]) -> Option<(String, String)> {
    let mut pieces: Vec<&str> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let piece = if i == 0 {
            token.strip_prefix(CTCP_DELIMITER).unwrap_or(token)
        } else {
            token.as_str()
        };
        let piece = piece.split(CTCP_DELIMITER).next().unwrap_or("");
        if !piece.is_empty() {
            pieces.push(piece);
        }
    }
    let (cmd, rest) = pieces.split_first()?;
    Some(((*cmd).to_owned(), rest.join(" ")))
}

/// Render a timestamp in the fixed CTCP `TIME` reply format,
/// e.g. `Fri Dec 06 14:05:00 2013`.
pub fn ctcp_time(when: NaiveDateTime) -> String {
    when.format("%a %b %d %H:%M:%S %Y").to_string()
}

//! ISUPPORT (numeric 005) capability folding.
//!
//! Servers advertise their dialect as whitespace-separated `KEY=VALUE`
//! tokens. The fold is fault-isolated per token: a value that fails to
//! parse is logged and skipped, and unrecognized keys leave the record
//! unchanged, so the remaining tokens on the line still apply.

use nom::{bytes::complete::take_until, character::complete::char, sequence::delimited, IResult};
use tracing::debug;

use crate::error::IsupportError;
use crate::message::Message;

/// The numeric reply carrying ISUPPORT tokens.
pub const RPL_ISUPPORT: &str = "005";

/// Session parameters advertised by the server.
///
/// Owned by the session layer and updated by functional replacement: this
/// crate receives a snapshot, returns a new one, and never mutates shared
/// state in place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionParams {
    /// Characters that introduce a channel name, from `CHANTYPES=`.
    pub channel_prefixes: Vec<char>,
    /// Display name of the network, from `NETWORK=`.
    pub network: Option<String>,
    /// Mode letter to display-prefix pairs, in server-advertised order,
    /// from `PREFIX=(modes)symbols`.
    pub user_prefixes: Vec<(char, char)>,
}

impl Default for SessionParams {
    /// RFC 1459 defaults, used until the server advertises otherwise.
    fn default() -> Self {
        SessionParams {
            channel_prefixes: vec!['#', '&'],
            network: None,
            user_prefixes: vec![('o', '@'), ('v', '+')],
        }
    }
}

/// A recognized, successfully parsed ISUPPORT token.
enum Token {
    ChanTypes(Vec<char>),
    Network(String),
    Prefix(Vec<(char, char)>),
}

/// Parse one token. `Ok(None)` means the key is not one we track.
fn parse_token(token: &str) -> Result<Option<Token>, IsupportError> {
    if let Some(value) = token.strip_prefix("CHANTYPES=") {
        Ok(Some(Token::ChanTypes(value.chars().collect())))
    } else if let Some(value) = token.strip_prefix("NETWORK=") {
        Ok(Some(Token::Network(value.to_owned())))
    } else if let Some(value) = token.strip_prefix("PREFIX=") {
        parse_prefix_value(value).map(|pairs| Some(Token::Prefix(pairs)))
    } else {
        Ok(None)
    }
}

/// Parse a `(modes)symbols` value, zipping mode letters with their display
/// prefixes positionally.
fn parse_prefix_value(value: &str) -> Result<Vec<(char, char)>, IsupportError> {
    let parsed: IResult<&str, &str> = delimited(char('('), take_until(")"), char(')'))(value);
    match parsed {
        Ok((symbols, modes)) => Ok(modes.chars().zip(symbols.chars()).collect()),
        Err(_) => Err(IsupportError::MalformedPrefix(value.to_owned())),
    }
}

/// Left-fold a sequence of ISUPPORT tokens into the record.
///
/// Fault-isolated per token: a parse failure is logged and skipped, and
/// processing continues with the next token.
pub fn apply_tokens<I, S>(params: SessionParams, tokens: I) -> SessionParams
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().fold(params, |mut acc, token| {
        match parse_token(token.as_ref()) {
            Ok(Some(Token::ChanTypes(chars))) => acc.channel_prefixes = chars,
            Ok(Some(Token::Network(name))) => acc.network = Some(name),
            Ok(Some(Token::Prefix(pairs))) => acc.user_prefixes = pairs,
            Ok(None) => {}
            Err(err) => {
                debug!(token = token.as_ref(), %err, "skipping unparseable ISUPPORT token");
            }
        }
        acc
    })
}

impl SessionParams {
    /// Fold a capability-advertisement message into the record.
    ///
    /// Any message other than a numeric 005 is returned unchanged. The
    /// leading nick argument and the trailing `are supported by this
    /// server` text fall through the fold as unrecognized tokens.
    #[must_use]
    pub fn absorb(self, msg: &Message) -> SessionParams {
        if msg.cmd == RPL_ISUPPORT {
            apply_tokens(self, &msg.args)
        } else {
            self
        }
    }
}

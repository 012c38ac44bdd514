//! IRC message origin (prefix) parsing.
//!
//! The leading `:`-marked token of a server line identifies the sender:
//! either another user (`nick[!user][@host]`) or the server itself. The two
//! cases are mutually exclusive, so they are modeled as a tagged union
//! rather than four independently-optional fields.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// The parsed origin of a server line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// A bare prefix token containing a dot: the server itself.
    Server(String),
    /// A user prefix, `nick[!user][@host]`.
    User {
        /// The sender's nickname.
        nick: String,
        /// The username, when the prefix carried a `!user` part.
        user: Option<String>,
        /// The hostname, when the prefix carried a `@host` part.
        host: Option<String>,
    },
}

/// Scan `nick[!user][@host]` into its parts.
fn origin_parts(input: &str) -> IResult<&str, (&str, Option<&str>, Option<&str>)> {
    let (input, head) = take_while1(|c: char| c != '!' && c != '@')(input)?;
    let (input, user) = opt(preceded(char('!'), take_while1(|c: char| c != '@')))(input)?;
    let (input, host) = opt(preceded(char('@'), take_while1(|_: char| true)))(input)?;
    Ok((input, (head, user, host)))
}

/// Parse an origin token (without its leading `:`).
///
/// A bare token is classified as a server name when it contains a dot,
/// otherwise as a bare nick. Input that does not match the grammar at all
/// yields `None`, leaving the origin unset on the message.
pub fn parse_origin(input: &str) -> Option<Origin> {
    let (rest, (head, user, host)) = origin_parts(input).ok()?;
    if !rest.is_empty() {
        return None;
    }
    if user.is_none() && host.is_none() && head.contains('.') {
        return Some(Origin::Server(head.to_owned()));
    }
    Some(Origin::User {
        nick: head.to_owned(),
        user: user.map(str::to_owned),
        host: host.map(str::to_owned),
    })
}

//! Outgoing client-to-server commands.
//!
//! One variant per supported command. `Display` renders the line without
//! its terminator; [`WireEncode`](crate::encode::WireEncode) appends the
//! CRLF and yields ready-to-send bytes. None of the builders validate
//! lengths or split lines; the 512-byte line limit is a transport concern.

mod serialize;

/// An outgoing IRC command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `PASS <password>`
    Pass(String),
    /// `NICK <nickname>`
    Nick(String),
    /// `USER <username> 0 * :<realname>`
    User(String, String),
    /// `JOIN <channel>` with an optional key.
    Join(String, Option<String>),
    /// `PART <channel>`
    Part(String),
    /// `PRIVMSG <target> :<text>`
    Privmsg(String, String),
    /// `NOTICE <target> :<text>`
    Notice(String, String),
    /// CTCP action: `PRIVMSG <target> :\u{1}ACTION <text>\u{1}`
    Action(String, String),
    /// A bare CTCP payload, `\u{1}<command>\u{1}`.
    Ctcp(String),
    /// `MODE <target> <flags>` with optional mode arguments.
    Mode(String, String, Option<String>),
    /// `KICK <channel> <user>` with an optional free-text reason.
    Kick(String, String, Option<String>),
    /// `INVITE <nickname> <channel>`
    Invite(String, String),
    /// `QUIT :<reason>`, defaulting to `Leaving`.
    Quit(Option<String>),
    /// `PONG <server>` or `PONG <server> <server2>`.
    Pong(String, Option<String>),
    /// Catch-all for verbs without a dedicated variant; the last argument
    /// is colon-prefixed when it needs to be.
    Raw(String, Vec<String>),
}

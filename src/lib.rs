//! # ircwire
//!
//! The wire-protocol core of an IRC client: raw byte lines in, structured
//! messages out, and structured commands in, ready-to-send protocol lines out.
//!
//! ## Features
//!
//! - Total line parsing: malformed input degrades to a best-effort
//!   [`Message`] instead of an error, so one bad line never tears down a
//!   long-lived connection
//! - CTCP envelope recognition inside `PRIVMSG`/`NOTICE` payloads, with an
//!   explicit tri-state [`CtcpStatus`]
//! - ISUPPORT (numeric 005) capability folding into [`SessionParams`]
//! - Outgoing [`Command`] encoding with correct argument ordering and CRLF
//!   termination
//! - Latin-1 reinterpretation of arguments that are not valid UTF-8
//!
//! ## Quick Start
//!
//! ### Parsing server lines
//!
//! ```rust
//! use ircwire::Message;
//!
//! let msg = Message::parse(b":nick!user@host PRIVMSG #chat :hello there\r\n");
//! assert_eq!(msg.cmd, "PRIVMSG");
//! assert_eq!(msg.nick(), Some("nick"));
//! assert_eq!(msg.args, ["#chat", "hello there"]);
//! ```
//!
//! ### Encoding client commands
//!
//! ```rust
//! use ircwire::{Command, WireEncode};
//!
//! let line = Command::Privmsg("#chat".into(), "hi all".into()).to_bytes();
//! assert_eq!(line, b"PRIVMSG #chat :hi all\r\n");
//! ```
//!
//! ### Folding capability advertisements
//!
//! ```rust
//! use ircwire::{Message, SessionParams};
//!
//! let caps = Message::parse(
//!     b":irc.example.org 005 nick NETWORK=Libera.Chat PREFIX=(ov)@+ CHANTYPES=#& :are supported by this server\r\n",
//! );
//! let params = SessionParams::default().absorb(&caps);
//! assert_eq!(params.network.as_deref(), Some("Libera.Chat"));
//! ```

#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod command;
pub mod ctcp;
pub mod encode;
pub mod error;
pub mod isupport;
pub mod message;
pub mod prefix;

pub use self::command::Command;
pub use self::ctcp::{ctcp_time, CtcpStatus, CTCP_DELIMITER};
pub use self::encode::WireEncode;
pub use self::error::IsupportError;
pub use self::isupport::{apply_tokens, SessionParams, RPL_ISUPPORT};
pub use self::message::Message;
pub use self::prefix::Origin;

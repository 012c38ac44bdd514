use crate::ctcp::CtcpStatus;
use crate::prefix::Origin;

/// One parsed protocol line.
///
/// A `Message` is constructed whole by [`Message::parse`] and never mutated
/// afterwards. Malformed input degrades to a best-effort value rather than
/// an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Who sent the line, when a `:`-prefix was present and matched the
    /// origin grammar.
    pub origin: Option<Origin>,
    /// Whether the payload carried a CTCP envelope.
    pub ctcp: CtcpStatus,
    /// The IRC verb or three-digit numeric reply.
    pub cmd: String,
    /// Ordered parameters. Space-tokenized, except that at most one final
    /// trailing element may contain embedded spaces. Never contains an
    /// empty string.
    pub args: Vec<String>,
}

impl Message {
    /// Parse one raw line into a `Message`. Never fails.
    pub fn parse(raw: &[u8]) -> Message {
        super::parse::parse(raw)
    }

    /// The server name, when the origin was a server.
    pub fn server(&self) -> Option<&str> {
        match &self.origin {
            Some(Origin::Server(name)) => Some(name),
            _ => None,
        }
    }

    /// The sender's nickname, when the origin was a user.
    pub fn nick(&self) -> Option<&str> {
        match &self.origin {
            Some(Origin::User { nick, .. }) => Some(nick),
            _ => None,
        }
    }

    /// The sender's username, when the origin carried one.
    pub fn user(&self) -> Option<&str> {
        match &self.origin {
            Some(Origin::User { user, .. }) => user.as_deref(),
            _ => None,
        }
    }

    /// The sender's hostname, when the origin carried one.
    pub fn host(&self) -> Option<&str> {
        match &self.origin {
            Some(Origin::User { host, .. }) => host.as_deref(),
            _ => None,
        }
    }
}

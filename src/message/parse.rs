//! The line parser: raw bytes in, one [`Message`] out.
//!
//! Tokenization is on single spaces with empty fragments discarded, the
//! way servers actually emit lines rather than the way RFC 2812 writes the
//! grammar. Arguments that are not valid UTF-8 are reinterpreted as
//! Latin-1 instead of rejected.

use encoding::mem::decode_latin1;
use tracing::debug;

use crate::ctcp::{self, CtcpStatus, CTCP_DELIMITER};
use crate::message::types::Message;
use crate::prefix::{parse_origin, Origin};

pub(crate) fn parse(raw: &[u8]) -> Message {
    let tokens = tokenize(raw);
    let mut msg = Message::default();

    let rest: &[String] = match tokens.first() {
        Some(first) if first.starts_with(':') => {
            msg.origin = parse_origin(&first[1..]);
            &tokens[1..]
        }
        _ => &tokens[..],
    };

    let Some((cmd, params)) = rest.split_first() else {
        return msg;
    };
    msg.cmd = cmd.clone();

    if is_message_verb(cmd) && params.len() >= 2 {
        let mut payload: Vec<String> = params[1..].to_vec();
        // Some servers emit the trailing marker ahead of the delimiter byte.
        if payload[0].starts_with(':') && payload[0][1..].starts_with(CTCP_DELIMITER) {
            payload[0].remove(0);
        }
        if payload[0].starts_with(CTCP_DELIMITER) {
            match ctcp::extract(&payload) {
                Some((ctcp_cmd, text)) => {
                    msg.cmd = ctcp_cmd;
                    msg.args.push(params[0].clone());
                    if !text.is_empty() {
                        msg.args.push(text);
                    }
                    msg.ctcp = CtcpStatus::Ctcp;
                }
                None => {
                    msg.ctcp = CtcpStatus::Invalid;
                }
            }
            return msg;
        }
    }

    msg.args = join_trailing(params);
    normalize_missing_topic(&mut msg);
    msg
}

fn is_message_verb(cmd: &str) -> bool {
    cmd == "PRIVMSG" || cmd == "NOTICE"
}

/// Split a line on spaces, discarding empty fragments and stripping any
/// trailing CRLF, and decode each token as text.
fn tokenize(raw: &[u8]) -> Vec<String> {
    raw.split(|&b| b == b' ')
        .map(strip_crlf)
        .filter(|token| !token.is_empty())
        .map(decode_token)
        .collect()
}

fn strip_crlf(mut token: &[u8]) -> &[u8] {
    while let [head @ .., b'\r' | b'\n'] = token {
        token = head;
    }
    token
}

fn decode_token(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => decode_latin1(bytes).into_owned(),
    }
}

/// Accumulate plain tokens as separate arguments until one begins with `:`;
/// from there, everything joins into a single trailing argument.
fn join_trailing(tokens: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        match token.strip_prefix(':') {
            Some(first) => {
                let mut trailing = first.to_owned();
                for extra in &tokens[i + 1..] {
                    trailing.push(' ');
                    trailing.push_str(extra);
                }
                if !trailing.is_empty() {
                    args.push(trailing);
                }
                return args;
            }
            None => args.push(token.clone()),
        }
    }
    args
}

/// Known server quirk: a topic reply (332) with the topic text missing.
/// Rewritten as RPL_NOTOPIC (331) with the nick moved out of the argument
/// list. A 332 with its topic present passes through untouched.
fn normalize_missing_topic(msg: &mut Message) {
    if msg.cmd != "332" || msg.args.len() != 2 {
        return;
    }
    debug!(channel = %msg.args[1], "rewriting topicless RPL_TOPIC to RPL_NOTOPIC");
    let nick = std::mem::take(&mut msg.args[0]);
    let channel = std::mem::take(&mut msg.args[1]);
    msg.cmd = "331".to_owned();
    msg.args = vec![channel, "No topic is set".to_owned()];
    msg.origin = Some(Origin::User {
        nick,
        user: None,
        host: None,
    });
}

use std::fmt::{self, Write};

use super::Command;
use crate::ctcp::CTCP_DELIMITER;
use crate::encode::needs_colon_prefix;

/// Write a command with plain space-joined arguments.
fn write_cmd(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    for arg in args {
        f.write_char(' ')?;
        f.write_str(arg)?;
    }
    Ok(())
}

/// Write a command whose last argument is always colon-prefixed trailing.
fn write_cmd_freeform(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    match args.split_last() {
        Some((suffix, middle)) => {
            f.write_str(cmd)?;
            for arg in middle {
                f.write_char(' ')?;
                f.write_str(arg)?;
            }
            f.write_str(" :")?;
            f.write_str(suffix)
        }
        None => f.write_str(cmd),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pass(p) => write_cmd(f, "PASS", &[p]),
            Command::Nick(n) => write_cmd(f, "NICK", &[n]),
            Command::User(u, r) => write_cmd_freeform(f, "USER", &[u, "0", "*", r]),
            Command::Join(c, Some(k)) => write_cmd(f, "JOIN", &[c, k]),
            Command::Join(c, None) => write_cmd(f, "JOIN", &[c]),
            Command::Part(c) => write_cmd(f, "PART", &[c]),
            Command::Privmsg(t, m) => write_cmd_freeform(f, "PRIVMSG", &[t, m]),
            Command::Notice(t, m) => write_cmd_freeform(f, "NOTICE", &[t, m]),
            Command::Action(t, m) => write!(
                f,
                "PRIVMSG {} :{}ACTION {}{}",
                t, CTCP_DELIMITER, m, CTCP_DELIMITER
            ),
            Command::Ctcp(c) => write!(f, "{}{}{}", CTCP_DELIMITER, c, CTCP_DELIMITER),
            Command::Mode(t, flags, Some(a)) => write_cmd(f, "MODE", &[t, flags, a]),
            Command::Mode(t, flags, None) => write_cmd(f, "MODE", &[t, flags]),
            Command::Kick(c, u, Some(r)) => write_cmd(f, "KICK", &[c, u, r]),
            Command::Kick(c, u, None) => write_cmd(f, "KICK", &[c, u]),
            Command::Invite(n, c) => write_cmd(f, "INVITE", &[n, c]),
            Command::Quit(Some(r)) => write_cmd_freeform(f, "QUIT", &[r]),
            Command::Quit(None) => write_cmd_freeform(f, "QUIT", &["Leaving"]),
            Command::Pong(s, Some(t)) => write_cmd(f, "PONG", &[s, t]),
            Command::Pong(s, None) => write_cmd(f, "PONG", &[s]),
            Command::Raw(c, a) => {
                f.write_str(c)?;
                for (i, arg) in a.iter().enumerate() {
                    f.write_char(' ')?;
                    if i == a.len() - 1 && needs_colon_prefix(arg) {
                        f.write_char(':')?;
                    }
                    f.write_str(arg)?;
                }
                Ok(())
            }
        }
    }
}

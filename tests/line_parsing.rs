//! End-to-end tests for raw line parsing.
//!
//! These exercise the full parse path: origin extraction, CTCP envelope
//! recognition, trailing-argument joining, the encoding fallback, and the
//! known server quirks.

use ircwire::{CtcpStatus, Message, Origin};

// =============================================================================
// ORIGIN HANDLING
// =============================================================================

mod origin {
    use super::*;

    #[test]
    fn test_user_prefix_sets_all_three_fields() {
        let msg = Message::parse(b":dennis!dee@paddys.pub PRIVMSG #chat :hello there\r\n");
        assert_eq!(msg.nick(), Some("dennis"));
        assert_eq!(msg.user(), Some("dee"));
        assert_eq!(msg.host(), Some("paddys.pub"));
        assert_eq!(msg.server(), None);
    }

    #[test]
    fn test_server_prefix_sets_server_only() {
        let msg = Message::parse(b":irc.example.org 372 tester :- welcome to the server\r\n");
        assert_eq!(msg.server(), Some("irc.example.org"));
        assert_eq!(msg.nick(), None);
        assert_eq!(msg.cmd, "372");
    }

    #[test]
    fn test_bare_nick_prefix() {
        let msg = Message::parse(b":dennis AWAY\r\n");
        assert_eq!(msg.nick(), Some("dennis"));
        assert_eq!(msg.user(), None);
        assert_eq!(msg.host(), None);
    }

    #[test]
    fn test_nick_at_host_prefix() {
        let msg = Message::parse(b":dennis@paddys.pub PART #chat\r\n");
        assert_eq!(msg.nick(), Some("dennis"));
        assert_eq!(msg.user(), None);
        assert_eq!(msg.host(), Some("paddys.pub"));
    }

    #[test]
    fn test_line_without_prefix_leaves_origin_unset() {
        let msg = Message::parse(b"PING :irc.example.org\r\n");
        assert_eq!(msg.origin, None);
        assert_eq!(msg.cmd, "PING");
        assert_eq!(msg.args, ["irc.example.org"]);
    }
}

// =============================================================================
// ARGUMENT TOKENIZATION
// =============================================================================

mod arguments {
    use super::*;

    #[test]
    fn test_trailing_argument_keeps_embedded_spaces() {
        let msg = Message::parse(b":irc.example.org 001 tester :Welcome to the Example Network\r\n");
        assert_eq!(msg.args, ["tester", "Welcome to the Example Network"]);
    }

    #[test]
    fn test_middle_arguments_stay_separate() {
        let msg = Message::parse(b":irc.example.org 353 tester = #chat :dennis mac charlie\r\n");
        assert_eq!(msg.args, ["tester", "=", "#chat", "dennis mac charlie"]);
    }

    #[test]
    fn test_runs_of_spaces_collapse() {
        let msg = Message::parse(b"JOIN  #chat   key\r\n");
        assert_eq!(msg.cmd, "JOIN");
        assert_eq!(msg.args, ["#chat", "key"]);
    }

    #[test]
    fn test_empty_trailing_is_dropped() {
        let msg = Message::parse(b"PRIVMSG #chat :\r\n");
        assert_eq!(msg.args, ["#chat"]);
        assert!(msg.args.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_empty_line_yields_default_message() {
        let msg = Message::parse(b"\r\n");
        assert_eq!(msg, Message::default());
    }

    #[test]
    fn test_invalid_utf8_argument_is_reinterpreted_as_latin1() {
        let msg = Message::parse(b":serv.example NOTICE tester :caf\xe9 ouvert\r\n");
        assert_eq!(msg.args, ["tester", "caf\u{e9} ouvert"]);
    }
}

// =============================================================================
// CTCP ENVELOPES
// =============================================================================

mod ctcp {
    use super::*;

    #[test]
    fn test_action_envelope() {
        let msg =
            Message::parse(b":dennis!dee@paddys.pub PRIVMSG #chat :\x01ACTION waves at everyone\x01\r\n");
        assert_eq!(msg.cmd, "ACTION");
        assert_eq!(msg.args, ["#chat", "waves at everyone"]);
        assert_eq!(msg.ctcp, CtcpStatus::Ctcp);
    }

    #[test]
    fn test_bare_envelope_has_no_argument_text() {
        let msg = Message::parse(b":dennis!dee@paddys.pub PRIVMSG tester :\x01VERSION\x01\r\n");
        assert_eq!(msg.cmd, "VERSION");
        assert_eq!(msg.args, ["tester"]);
        assert_eq!(msg.ctcp, CtcpStatus::Ctcp);
    }

    #[test]
    fn test_notice_envelope() {
        let msg = Message::parse(b":dennis!dee@paddys.pub NOTICE tester :\x01PING 12345\x01\r\n");
        assert_eq!(msg.cmd, "PING");
        assert_eq!(msg.args, ["tester", "12345"]);
        assert_eq!(msg.ctcp, CtcpStatus::Ctcp);
    }

    #[test]
    fn test_delimiter_without_trailing_marker() {
        // Server variant that omits the `:` ahead of the delimiter byte.
        let msg = Message::parse(b":dennis!dee@paddys.pub PRIVMSG #chat \x01ACTION waves\x01\r\n");
        assert_eq!(msg.cmd, "ACTION");
        assert_eq!(msg.args, ["#chat", "waves"]);
        assert_eq!(msg.ctcp, CtcpStatus::Ctcp);
    }

    #[test]
    fn test_empty_envelope_is_marked_invalid() {
        let msg = Message::parse(b":dennis!dee@paddys.pub PRIVMSG #chat :\x01\x01\r\n");
        assert_eq!(msg.cmd, "PRIVMSG");
        assert_eq!(msg.args, Vec::<String>::new());
        assert_eq!(msg.ctcp, CtcpStatus::Invalid);
    }

    #[test]
    fn test_plain_privmsg_is_not_ctcp() {
        let msg = Message::parse(b":dennis!dee@paddys.pub PRIVMSG #chat :hello\r\n");
        assert_eq!(msg.ctcp, CtcpStatus::Plain);
    }

    #[test]
    fn test_delimiter_outside_message_verbs_is_ignored() {
        let msg = Message::parse(b":serv.example 332 tester #chat :\x01odd topic\x01\r\n");
        assert_eq!(msg.cmd, "332");
        assert_eq!(msg.ctcp, CtcpStatus::Plain);
    }
}

// =============================================================================
// SERVER QUIRKS
// =============================================================================

mod quirks {
    use super::*;

    #[test]
    fn test_topicless_332_becomes_331() {
        let msg = Message::parse(b":serv.example 332 tester #chat\r\n");
        assert_eq!(msg.cmd, "331");
        assert_eq!(msg.args, ["#chat", "No topic is set"]);
        assert_eq!(msg.nick(), Some("tester"));
    }

    #[test]
    fn test_332_with_topic_passes_through() {
        let msg = Message::parse(b":serv.example 332 tester #chat :paddy's pub talk\r\n");
        assert_eq!(msg.cmd, "332");
        assert_eq!(msg.args, ["tester", "#chat", "paddy's pub talk"]);
        assert_eq!(msg.server(), Some("serv.example"));
    }

    #[test]
    fn test_other_numerics_are_not_rewritten() {
        let msg = Message::parse(b":serv.example 331 tester #chat\r\n");
        assert_eq!(msg.cmd, "331");
        assert_eq!(msg.args, ["tester", "#chat"]);
    }
}

// =============================================================================
// DEFENSIVE POSTURE
// =============================================================================

mod defensive {
    use super::*;

    #[test]
    fn test_unmatched_origin_grammar_leaves_fields_unset() {
        let msg = Message::parse(b":!user@host PRIVMSG #chat :hi\r\n");
        assert_eq!(msg.origin, None);
        assert_eq!(msg.cmd, "PRIVMSG");
    }

    #[test]
    fn test_prefix_only_line() {
        let msg = Message::parse(b":irc.example.org\r\n");
        assert_eq!(msg.server(), Some("irc.example.org"));
        assert_eq!(msg.cmd, "");
        assert!(msg.args.is_empty());
    }

    #[test]
    fn test_origin_is_tagged_union() {
        let msg = Message::parse(b":irc.example.org 005 tester NETWORK=Example\r\n");
        match msg.origin {
            Some(Origin::Server(ref name)) => assert_eq!(name, "irc.example.org"),
            ref other => panic!("expected server origin, got {:?}", other),
        }
    }
}

//! Fuzz target for the raw line parser.
//!
//! The parser is total by contract: any byte sequence must yield a
//! best-effort message without panicking, and the argument list must
//! never contain an empty string.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Over 512 bytes is unusual for IRC; keep the corpus focused
    if data.len() > 512 {
        return;
    }

    let msg = ircwire::Message::parse(data);
    assert!(msg.args.iter().all(|arg| !arg.is_empty()));
});

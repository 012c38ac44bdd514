//! Fuzz target for the origin (prefix) scanner.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.is_empty() || input.len() > 256 {
            return;
        }

        // Should never panic; unmatched grammar yields None
        let _ = ircwire::prefix::parse_origin(input);
    }
});

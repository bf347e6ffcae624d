//! Fuzz target for the translator.
//!
//! Arbitrary text must either fail cleanly or produce bytes that the
//! loader accepts back unchanged.

#![no_main]

use emu6502::{parse_program, translate, translate_to_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);

    if let Ok(bytes) = translate(&source) {
        let hex = translate_to_hex(&source).unwrap();
        assert_eq!(parse_program(&hex).unwrap(), bytes);
    }
});

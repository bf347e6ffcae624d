//! Fuzz target for the program loader.

#![no_main]

use emu6502::{Bus, MemoryBus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut bus = Bus::new();

    match bus.load_program(&text) {
        Ok(len) => assert!(len <= 0x1_0000 - 0x2000),
        // Rejected programs must not touch memory
        Err(_) => assert_eq!(bus.read(0x2000), 0x00),
    }
});

//! Example running a program against the output window.
//!
//! The program counts down from 5 into 0x0400 and writes the square of the
//! starting value into 0x0401. The output peripheral prints every change:
//!
//! ```text
//! First: 5
//! Second: 25
//! First: 4
//! ...
//! ```
//!
//! Memory layout is the fixed system map: zero page, stack page, the output
//! window at 0x0400-0x0404, the drawing window at 0x0500-0x0502 and RAM from
//! 0x1000. The program is loaded at 0x2000.

use emu6502::{Bus, BusConfig, MemoryBus, OutputDevice};

fn main() {
    println!("6502 Output Window Example");
    println!("==========================\n");

    let mut bus = Bus::with_peripherals(BusConfig::default(), vec![Box::new(OutputDevice::new())]);

    // Reset vector -> 0x2000
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x20);

    // LDA #$19    ; 25
    // STA $0401
    // LDX #$05
    // loop:
    // STX $0400
    // DEX
    // BNE loop
    // STX $0400   ; final 0
    // JMP *       ; spin
    let program = "0xA9 0x19 0x8D 0x01 0x04 0xA2 0x05 \
                   0x8E 0x00 0x04 0xCA 0xD0 0xFA \
                   0x8E 0x00 0x04 0x4C 0x10 0x20";

    let loaded = bus.load_program(program).expect("Failed to load program");
    println!("Loaded {loaded} bytes at 0x{:04X}\n", bus.config().load_address);

    bus.reset();

    let ticks = bus.run(500);

    println!("\nRan {ticks} ticks");
    println!("  PC: 0x{:04X}", bus.cpu().pc());
    println!("  X:  0x{:02X}", bus.cpu().x());
}

//! Example translating mnemonic text, loading it and stepping through it.
//!
//! Each instruction is executed with `Bus::step_instruction`, and the
//! register file is printed after every step together with the number of
//! ticks the instruction took.

use emu6502::{translate, translate_to_hex, Bus, MemoryBus};

const SOURCE: &str = "
    LDX #$00
    LDA #$01
    STA $10,X
    ASL A
    INX
    CPX #$08
    BNE $F8
    LDA $17
";

fn main() {
    println!("6502 Translate-and-Run Example");
    println!("==============================\n");

    let bytes = translate(SOURCE).expect("Failed to translate program");
    let hex = translate_to_hex(SOURCE).expect("Failed to translate program");
    println!("{} bytes: {hex}\n", bytes.len());

    let mut bus = Bus::new();
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x20);
    bus.load_program(&hex).expect("Failed to load program");
    bus.reset();

    let end = bus.config().load_address + bytes.len() as u16;
    let mut step = 0;
    while bus.cpu().pc() != end && step < 100 {
        let pc_before = bus.cpu().pc();
        let ticks = bus.step_instruction();
        step += 1;

        let cpu = bus.cpu();
        println!(
            "{step:3}: PC=0x{pc_before:04X} ticks={ticks} A=0x{:02X} X=0x{:02X} P={:08b}",
            cpu.a(),
            cpu.x(),
            cpu.status().bits()
        );
    }

    println!("\nPowers of two written to $10-$17:");
    for addr in 0x10..0x18u16 {
        print!(" {:02X}", bus.read(addr));
    }
    println!();
}

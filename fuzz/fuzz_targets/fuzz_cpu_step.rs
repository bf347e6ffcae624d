//! Fuzz target for instruction execution.
//!
//! Builds an arbitrary register file and memory neighbourhood, runs one
//! instruction through the tick loop and checks the timing invariants.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{Cpu, FlatMemory, MemoryBus, Status, INSTRUCTION_TABLE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x4000 for absolute operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    while !cpu.complete() {
        cpu.tick(&mut memory);
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    let opcode = input.memory.instruction_bytes[0];
    let base = INSTRUCTION_TABLE[opcode as usize].cycles as u32;

    let mut ticks = 1;
    cpu.tick(&mut memory);
    while !cpu.complete() {
        cpu.tick(&mut memory);
        ticks += 1;
    }

    // At most two extra cycles (taken branch across a page)
    assert!(ticks >= base && ticks <= base + 2);
    assert_eq!(cpu.opcode(), opcode);
});

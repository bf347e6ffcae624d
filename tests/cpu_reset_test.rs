//! Tests for power-on state and reset.

use emu6502::{Cpu, FlatMemory, MemoryBus, Status};

#[test]
fn test_reset_reads_vector() {
    let mut mem = FlatMemory::new();
    mem.write(0xFFFC, 0x34);
    mem.write(0xFFFD, 0x12);

    let mut cpu = Cpu::new();
    cpu.reset(&mem);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.status(), Status::empty());
    assert_eq!(cpu.remaining_cycles(), 8);
}

#[test]
fn test_reset_clears_registers_after_running() {
    let mut mem = FlatMemory::new();
    mem.write(0xFFFD, 0x80);
    mem.load(0x8000, &[0xA9, 0xFF, 0xAA, 0x38]); // LDA #$FF; TAX; SEC

    let mut cpu = Cpu::new();
    cpu.reset(&mem);
    for _ in 0..(8 + 2 + 2 + 2) {
        cpu.tick(&mut mem);
    }
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag(Status::CARRY));

    cpu.reset(&mem);

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert!(!cpu.flag(Status::CARRY));
    assert!(!cpu.complete());
}

#[test]
fn test_reset_latency_before_first_fetch() {
    let mut mem = FlatMemory::new();
    mem.write(0xFFFD, 0x80);
    mem.load(0x8000, &[0xE8]); // INX

    let mut cpu = Cpu::new();
    cpu.reset(&mem);

    for _ in 0..8 {
        cpu.tick(&mut mem);
        assert_eq!(cpu.x(), 0);
        assert_eq!(cpu.pc(), 0x8000);
    }
    assert!(cpu.complete());

    cpu.tick(&mut mem);
    assert_eq!(cpu.x(), 1);
}

#[test]
fn test_instruction_executes_on_first_tick() {
    let mut mem = FlatMemory::new();
    mem.write(0xFFFD, 0x80);
    mem.load(0x8000, &[0x8D, 0x00, 0x30]); // STA $3000

    let mut cpu = Cpu::new();
    cpu.reset(&mem);
    cpu.set_a(0x42);
    while !cpu.complete() {
        cpu.tick(&mut mem);
    }

    cpu.tick(&mut mem);

    assert_eq!(mem.read(0x3000), 0x42);
    assert_eq!(cpu.remaining_cycles(), 3);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_total_ticks_counts_every_tick() {
    let mut mem = FlatMemory::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mem);

    for _ in 0..20 {
        cpu.tick(&mut mem);
    }

    assert_eq!(cpu.total_ticks(), 20);
}

//! Property-based tests for instruction semantics.
//!
//! Each property runs one instruction and compares the result with a
//! straightforward model of the operation.

use emu6502::{Cpu, FlatMemory, MemoryBus, Status};
use proptest::prelude::*;

/// CPU at 0x8000 with `program` loaded and reset latency drained.
fn setup_cpu(program: &[u8]) -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    while !cpu.complete() {
        cpu.tick(&mut memory);
    }
    (cpu, memory)
}

fn step(cpu: &mut Cpu, memory: &mut FlatMemory) -> u32 {
    cpu.tick(memory);
    let mut cycles = 1;
    while !cpu.complete() {
        cpu.tick(memory);
        cycles += 1;
    }
    cycles
}

proptest! {
    /// Property: ADC matches 9-bit addition and signed overflow
    #[test]
    fn prop_adc_matches_model(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0x69, m]);
        cpu.set_a(a);
        cpu.set_flag(Status::CARRY, carry);

        step(&mut cpu, &mut mem);

        let sum = a as u16 + m as u16 + carry as u16;
        let result = sum as u8;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag(Status::CARRY), sum > 0xFF);
        prop_assert_eq!(cpu.flag(Status::ZERO), result == 0);
        prop_assert_eq!(cpu.flag(Status::NEGATIVE), result & 0x80 != 0);
        prop_assert_eq!(cpu.flag(Status::OVERFLOW), !(-128..=127).contains(&signed));
    }

    /// Property: SBC matches subtraction with borrow = !carry
    #[test]
    fn prop_sbc_matches_model(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0xE9, m]);
        cpu.set_a(a);
        cpu.set_flag(Status::CARRY, carry);

        step(&mut cpu, &mut mem);

        let borrow = !carry as i16;
        let diff = a as i16 - m as i16 - borrow;
        let result = diff as u8;
        let signed = a as i8 as i16 - m as i8 as i16 - borrow;

        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(cpu.flag(Status::CARRY), diff >= 0);
        prop_assert_eq!(cpu.flag(Status::ZERO), result == 0);
        prop_assert_eq!(cpu.flag(Status::OVERFLOW), !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets carry on reg >= M and leaves A alone
    #[test]
    fn prop_cmp_matches_model(a in any::<u8>(), m in any::<u8>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0xC9, m]);
        cpu.set_a(a);

        step(&mut cpu, &mut mem);

        let diff = a.wrapping_sub(m);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flag(Status::CARRY), a >= m);
        prop_assert_eq!(cpu.flag(Status::ZERO), a == m);
        prop_assert_eq!(cpu.flag(Status::NEGATIVE), diff & 0x80 != 0);
    }

    /// Property: loads set Z and N from the loaded value only
    #[test]
    fn prop_load_flags(value in any::<u8>(), carry in any::<bool>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0xA0, value]); // LDY #value
        cpu.set_flag(Status::CARRY, carry);

        step(&mut cpu, &mut mem);

        prop_assert_eq!(cpu.y(), value);
        prop_assert_eq!(cpu.flag(Status::ZERO), value == 0);
        prop_assert_eq!(cpu.flag(Status::NEGATIVE), value >= 0x80);
        prop_assert_eq!(cpu.flag(Status::CARRY), carry);
    }

    /// Property: PHP then PLP restores any status byte
    #[test]
    fn prop_status_survives_stack(bits in any::<u8>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0x08, 0xB8, 0x18, 0x28]); // PHP; CLV; CLC; PLP
        cpu.set_status(Status::from_bits_retain(bits));

        for _ in 0..4 {
            step(&mut cpu, &mut mem);
        }

        prop_assert_eq!(cpu.status().bits(), bits);
        prop_assert_eq!(cpu.sp(), 0xFD);
    }

    /// Property: BIT copies bits 6 and 7 of memory and tests A & M
    #[test]
    fn prop_bit_matches_model(a in any::<u8>(), m in any::<u8>()) {
        let (mut cpu, mut mem) = setup_cpu(&[0x24, 0x40]); // BIT $40
        mem.write(0x0040, m);
        cpu.set_a(a);

        step(&mut cpu, &mut mem);

        prop_assert_eq!(cpu.flag(Status::ZERO), a & m == 0);
        prop_assert_eq!(cpu.flag(Status::NEGATIVE), m & 0x80 != 0);
        prop_assert_eq!(cpu.flag(Status::OVERFLOW), m & 0x40 != 0);
        prop_assert_eq!(cpu.a(), a);
    }
}

//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC, SBC: binary add/subtract with carry (decimal mode is ignored)
//! - AND, ORA, EOR: bitwise logic into the accumulator
//! - CMP, CPX, CPY: register compare
//! - BIT: bit test
//!
//! Arithmetic runs in the CPU's 16-bit `temp` so carry out of bit 7 can be
//! read back from bit 8.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::status::Status;

/// ADC: A = A + M + C.
///
/// - C: set if the unsigned sum exceeds 0xFF
/// - V: set if both inputs share a sign the result does not have
/// - Z, N: from the 8-bit result
pub(crate) fn adc<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    add_to_accumulator(cpu, value);
    true
}

/// SBC: A = A - M - (1 - C), computed as an ADC of the inverted operand.
///
/// C ends up set when no borrow occurred.
pub(crate) fn sbc<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode) ^ 0xFF;
    add_to_accumulator(cpu, value);
    true
}

fn add_to_accumulator(cpu: &mut Cpu, value: u8) {
    let a = cpu.a as u16;
    let m = value as u16;
    cpu.temp = a + m + cpu.status.carry_bit();

    cpu.status.set(Status::CARRY, cpu.temp & 0xFF00 != 0);
    cpu.status
        .set(Status::OVERFLOW, (!(a ^ m) & (a ^ cpu.temp)) & 0x0080 != 0);

    cpu.a = (cpu.temp & 0x00FF) as u8;
    cpu.status.set_zn(cpu.a);
}

/// AND: A = A & M. Sets Z and N.
pub(crate) fn and<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.a &= cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.a);
    true
}

/// ORA: A = A | M. Sets Z and N.
pub(crate) fn ora<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.a |= cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.a);
    true
}

/// EOR: A = A ^ M. Sets Z and N.
pub(crate) fn eor<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.a ^= cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.a);
    true
}

/// BIT: Z from A & M, N and V copied from bits 7 and 6 of M.
pub(crate) fn bit<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
    false
}

/// CMP: compares A with M.
pub(crate) fn cmp<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let register = cpu.a;
    compare(cpu, bus, mode, register);
    true
}

/// CPX: compares X with M.
pub(crate) fn cpx<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let register = cpu.x;
    compare(cpu, bus, mode, register);
    false
}

/// CPY: compares Y with M.
pub(crate) fn cpy<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let register = cpu.y;
    compare(cpu, bus, mode, register);
    false
}

// C = register >= M, Z and N from the low byte of the difference
fn compare<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode, register: u8) {
    let value = cpu.fetch(bus, mode);
    cpu.temp = (register as u16).wrapping_sub(value as u16);
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.set_zn((cpu.temp & 0x00FF) as u8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn immediate(value: u8) -> (Cpu, FlatMemory) {
        let mut mem = FlatMemory::new();
        mem.write(0x0010, value);
        let mut cpu = Cpu::new();
        cpu.addr_abs = 0x0010;
        (cpu, mem)
    }

    #[test]
    fn test_adc_signed_overflow() {
        let (mut cpu, mut mem) = immediate(0x50);
        cpu.a = 0x50;

        adc(&mut cpu, &mut mem, AddressingMode::Immediate);

        assert_eq!(cpu.a, 0xA0);
        assert!(!cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::OVERFLOW));
        assert!(cpu.flag(Status::NEGATIVE));
        assert!(!cpu.flag(Status::ZERO));
    }

    #[test]
    fn test_adc_carry_out_to_zero() {
        let (mut cpu, mut mem) = immediate(0x01);
        cpu.a = 0xFF;

        adc(&mut cpu, &mut mem, AddressingMode::Immediate);

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::ZERO));
        assert!(!cpu.flag(Status::OVERFLOW));
    }

    #[test]
    fn test_sbc_with_carry_set_is_plain_subtraction() {
        let (mut cpu, mut mem) = immediate(0x03);
        cpu.a = 0x05;
        cpu.status.insert(Status::CARRY);

        sbc(&mut cpu, &mut mem, AddressingMode::Immediate);

        assert_eq!(cpu.a, 0x02);
        assert!(cpu.flag(Status::CARRY));
        assert!(!cpu.flag(Status::OVERFLOW));
    }

    #[test]
    fn test_sbc_borrow_clears_carry() {
        let (mut cpu, mut mem) = immediate(0x01);
        cpu.a = 0x00;
        cpu.status.insert(Status::CARRY);

        sbc(&mut cpu, &mut mem, AddressingMode::Immediate);

        assert_eq!(cpu.a, 0xFF);
        assert!(!cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::NEGATIVE));
    }

    #[test]
    fn test_sbc_signed_overflow() {
        // 0x80 - 0x01 = 0x7F: negative minus positive yields positive
        let (mut cpu, mut mem) = immediate(0x01);
        cpu.a = 0x80;
        cpu.status.insert(Status::CARRY);

        sbc(&mut cpu, &mut mem, AddressingMode::Immediate);

        assert_eq!(cpu.a, 0x7F);
        assert!(cpu.flag(Status::OVERFLOW));
        assert!(cpu.flag(Status::CARRY));
    }

    #[test]
    fn test_compare_flags() {
        let (mut cpu, mut mem) = immediate(0x10);

        cpu.a = 0x10;
        cmp(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert!(cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::ZERO));

        cpu.x = 0x0F;
        cpx(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert!(!cpu.flag(Status::CARRY));
        assert!(!cpu.flag(Status::ZERO));
        assert!(cpu.flag(Status::NEGATIVE));

        cpu.y = 0x20;
        cpy(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert!(cpu.flag(Status::CARRY));
        assert!(!cpu.flag(Status::ZERO));
        assert!(!cpu.flag(Status::NEGATIVE));
    }

    #[test]
    fn test_bit_copies_operand_bits() {
        let (mut cpu, mut mem) = immediate(0xC0);
        cpu.a = 0x01;

        bit(&mut cpu, &mut mem, AddressingMode::ZeroPage);

        assert!(cpu.flag(Status::ZERO));
        assert!(cpu.flag(Status::NEGATIVE));
        assert!(cpu.flag(Status::OVERFLOW));
        assert_eq!(cpu.a, 0x01);
    }

    #[test]
    fn test_logic_ops() {
        let (mut cpu, mut mem) = immediate(0x0F);

        cpu.a = 0xF0;
        and(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(Status::ZERO));

        ora(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert_eq!(cpu.a, 0x0F);
        assert!(!cpu.flag(Status::ZERO));

        cpu.a = 0xFF;
        eor(&mut cpu, &mut mem, AddressingMode::Immediate);
        assert_eq!(cpu.a, 0xF0);
        assert!(cpu.flag(Status::NEGATIVE));
    }
}

//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR. In accumulator mode the operand is A and the
//! result goes back to A; otherwise the resolved memory byte is rewritten.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn asl<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, bus, mode, value << 1);
    false
}

pub(crate) fn lsr<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, bus, mode, value >> 1);
    false
}

pub(crate) fn rol<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    let carry_in = cpu.status.carry_bit() as u8;
    cpu.status.set(Status::CARRY, value & 0x80 != 0);
    write_back(cpu, bus, mode, (value << 1) | carry_in);
    false
}

pub(crate) fn ror<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let value = cpu.fetch(bus, mode);
    let carry_in = cpu.status.carry_bit() as u8;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    write_back(cpu, bus, mode, (value >> 1) | (carry_in << 7));
    false
}

fn write_back<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode, result: u8) {
    cpu.status.set_zn(result);
    if mode.targets_accumulator() {
        cpu.a = result;
    } else {
        bus.write(cpu.addr_abs, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn accumulator(a: u8) -> Cpu {
        let mut cpu = Cpu::new();
        cpu.a = a;
        cpu.fetched = a;
        cpu
    }

    #[test]
    fn test_asl_accumulator() {
        let mut mem = FlatMemory::new();
        let mut cpu = accumulator(0x81);

        asl(&mut cpu, &mut mem, AddressingMode::Accumulator);

        assert_eq!(cpu.a, 0x02);
        assert!(cpu.flag(Status::CARRY));
        assert!(!cpu.flag(Status::NEGATIVE));
    }

    #[test]
    fn test_lsr_memory_leaves_accumulator() {
        let mut mem = FlatMemory::new();
        mem.write(0x0050, 0x01);
        let mut cpu = accumulator(0x77);
        cpu.addr_abs = 0x0050;

        lsr(&mut cpu, &mut mem, AddressingMode::ZeroPage);

        assert_eq!(mem.read(0x0050), 0x00);
        assert_eq!(cpu.a, 0x77);
        assert!(cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::ZERO));
    }

    #[test]
    fn test_rotates_through_carry() {
        let mut mem = FlatMemory::new();
        let mut cpu = accumulator(0x80);
        cpu.status.insert(Status::CARRY);

        rol(&mut cpu, &mut mem, AddressingMode::Accumulator);
        assert_eq!(cpu.a, 0x01);
        assert!(cpu.flag(Status::CARRY));

        cpu.fetched = cpu.a;
        ror(&mut cpu, &mut mem, AddressingMode::Accumulator);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.flag(Status::CARRY));
        assert!(cpu.flag(Status::NEGATIVE));

        cpu.fetched = cpu.a;
        ror(&mut cpu, &mut mem, AddressingMode::Accumulator);
        assert_eq!(cpu.a, 0xC0);
        assert!(!cpu.flag(Status::CARRY));
    }
}

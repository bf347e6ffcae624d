//! # Increment and Decrement Instructions
//!
//! INC/DEC read-modify-write memory; INX/INY/DEX/DEY work on the index
//! registers. All wrap modulo 256 and set Z and N from the result.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

pub(crate) fn inc<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let result = cpu.fetch(bus, mode).wrapping_add(1);
    bus.write(cpu.addr_abs, result);
    cpu.status.set_zn(result);
    false
}

pub(crate) fn dec<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    let result = cpu.fetch(bus, mode).wrapping_sub(1);
    bus.write(cpu.addr_abs, result);
    cpu.status.set_zn(result);
    false
}

pub(crate) fn inx(cpu: &mut Cpu) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn iny(cpu: &mut Cpu) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn dex(cpu: &mut Cpu) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn dey(cpu: &mut Cpu) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use crate::FlatMemory;

    #[test]
    fn test_inc_dec_memory_wrap() {
        let mut mem = FlatMemory::new();
        mem.write(0x0042, 0xFF);
        let mut cpu = Cpu::new();
        cpu.addr_abs = 0x0042;

        inc(&mut cpu, &mut mem, AddressingMode::ZeroPage);
        assert_eq!(mem.read(0x0042), 0x00);
        assert!(cpu.flag(Status::ZERO));

        dec(&mut cpu, &mut mem, AddressingMode::ZeroPage);
        assert_eq!(mem.read(0x0042), 0xFF);
        assert!(cpu.flag(Status::NEGATIVE));
        assert!(!cpu.flag(Status::ZERO));
    }

    #[test]
    fn test_index_registers_wrap() {
        let mut cpu = Cpu::new();

        dex(&mut cpu);
        assert_eq!(cpu.x, 0xFF);
        assert!(cpu.flag(Status::NEGATIVE));
        inx(&mut cpu);
        assert_eq!(cpu.x, 0x00);
        assert!(cpu.flag(Status::ZERO));

        cpu.y = 0x7F;
        iny(&mut cpu);
        assert_eq!(cpu.y, 0x80);
        assert!(cpu.flag(Status::NEGATIVE));
        dey(&mut cpu);
        assert_eq!(cpu.y, 0x7F);
        assert!(!cpu.flag(Status::NEGATIVE));
    }
}

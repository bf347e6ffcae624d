//! # Load and Store Instructions
//!
//! Loads copy the operand into a register and set Z and N. Stores write a
//! register to the resolved address and leave the flags alone.

use crate::addressing::AddressingMode;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

pub(crate) fn lda<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.a = cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.a);
    true
}

pub(crate) fn ldx<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.x = cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.x);
    true
}

pub(crate) fn ldy<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M, mode: AddressingMode) -> bool {
    cpu.y = cpu.fetch(bus, mode);
    cpu.status.set_zn(cpu.y);
    true
}

pub(crate) fn sta<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    bus.write(cpu.addr_abs, cpu.a);
    false
}

pub(crate) fn stx<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    bus.write(cpu.addr_abs, cpu.x);
    false
}

pub(crate) fn sty<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    bus.write(cpu.addr_abs, cpu.y);
    false
}

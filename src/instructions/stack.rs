//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA / PLA: push and pull the accumulator
//! - PHP / PLP: push and pull the packed status byte
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn pha<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let a = cpu.a;
    cpu.push(bus, a);
    false
}

/// PLA: pulls into A and sets Z and N.
pub(crate) fn pla<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    cpu.a = cpu.pull(bus);
    cpu.status.set_zn(cpu.a);
    false
}

/// PHP: pushes the packed status exactly as held.
pub(crate) fn php<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let packed = cpu.status.bits();
    cpu.push(bus, packed);
    false
}

/// PLP: every bit of the pulled byte becomes the new status.
pub(crate) fn plp<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let packed = cpu.pull(bus);
    cpu.status = Status::from_bits_retain(packed);
    false
}

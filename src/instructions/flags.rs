//! # Flag Instructions
//!
//! Set and clear single status flags. None of them read memory.

use crate::cpu::Cpu;
use crate::status::Status;

pub(crate) fn clc(cpu: &mut Cpu) -> bool {
    cpu.status.remove(Status::CARRY);
    false
}

pub(crate) fn cld(cpu: &mut Cpu) -> bool {
    cpu.status.remove(Status::DECIMAL);
    false
}

pub(crate) fn cli(cpu: &mut Cpu) -> bool {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
    false
}

pub(crate) fn clv(cpu: &mut Cpu) -> bool {
    cpu.status.remove(Status::OVERFLOW);
    false
}

pub(crate) fn sec(cpu: &mut Cpu) -> bool {
    cpu.status.insert(Status::CARRY);
    false
}

/// SED only records the flag; arithmetic stays binary.
pub(crate) fn sed(cpu: &mut Cpu) -> bool {
    cpu.status.insert(Status::DECIMAL);
    false
}

pub(crate) fn sei(cpu: &mut Cpu) -> bool {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
    false
}

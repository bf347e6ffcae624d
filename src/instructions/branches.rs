//! # Branch Instructions
//!
//! This module implements the eight conditional branches. All of them use
//! relative addressing: the resolver has already sign-extended the offset
//! into `addr_rel` and left PC on the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken to the same page
//! - 4 cycles if taken across a page boundary
//!
//! Branch penalties are charged here directly, so branches never take part
//! in the extra-cycle agreement.

use crate::cpu::Cpu;
use crate::status::Status;

/// Takes the branch when `condition` holds.
fn branch_if(cpu: &mut Cpu, condition: bool) -> bool {
    if condition {
        cpu.cycles += 1;
        cpu.addr_abs = cpu.pc.wrapping_add(cpu.addr_rel);

        if cpu.addr_abs & 0xFF00 != cpu.pc & 0xFF00 {
            cpu.cycles += 1;
        }

        cpu.pc = cpu.addr_abs;
    }
    false
}

/// BCC: branch if carry clear.
pub(crate) fn bcc(cpu: &mut Cpu) -> bool {
    let condition = !cpu.flag(Status::CARRY);
    branch_if(cpu, condition)
}

/// BCS: branch if carry set.
pub(crate) fn bcs(cpu: &mut Cpu) -> bool {
    let condition = cpu.flag(Status::CARRY);
    branch_if(cpu, condition)
}

/// BEQ: branch if zero set.
pub(crate) fn beq(cpu: &mut Cpu) -> bool {
    let condition = cpu.flag(Status::ZERO);
    branch_if(cpu, condition)
}

/// BNE: branch if zero clear.
pub(crate) fn bne(cpu: &mut Cpu) -> bool {
    let condition = !cpu.flag(Status::ZERO);
    branch_if(cpu, condition)
}

/// BMI: branch if negative set.
pub(crate) fn bmi(cpu: &mut Cpu) -> bool {
    let condition = cpu.flag(Status::NEGATIVE);
    branch_if(cpu, condition)
}

/// BPL: branch if negative clear.
pub(crate) fn bpl(cpu: &mut Cpu) -> bool {
    let condition = !cpu.flag(Status::NEGATIVE);
    branch_if(cpu, condition)
}

/// BVC: branch if overflow clear.
pub(crate) fn bvc(cpu: &mut Cpu) -> bool {
    let condition = !cpu.flag(Status::OVERFLOW);
    branch_if(cpu, condition)
}

/// BVS: branch if overflow set.
pub(crate) fn bvs(cpu: &mut Cpu) -> bool {
    let condition = cpu.flag(Status::OVERFLOW);
    branch_if(cpu, condition)
}

//! # Control Flow Instructions
//!
//! This module implements:
//! - JMP: jump to the resolved address (absolute or indirect)
//! - JSR / RTS: subroutine call and return
//! - BRK / RTI: software break and return from interrupt
//! - NOP and the one-byte no-op used for every unofficial opcode

use log::debug;

use crate::cpu::{Cpu, BREAK_VECTOR};
use crate::memory::MemoryBus;
use crate::status::Status;

/// JMP: PC = resolved address.
pub(crate) fn jmp(cpu: &mut Cpu) -> bool {
    cpu.pc = cpu.addr_abs;
    false
}

/// JSR: pushes the address of the last operand byte, high byte first, then
/// jumps.
pub(crate) fn jsr<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push(bus, (return_addr >> 8) as u8);
    cpu.push(bus, return_addr as u8);
    cpu.pc = cpu.addr_abs;
    false
}

/// RTS: pulls the address pushed by JSR and resumes after it.
pub(crate) fn rts<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let lo = cpu.pull(bus) as u16;
    let hi = cpu.pull(bus) as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    false
}

/// BRK: pushes PC (skipping the padding byte) and status with BREAK set,
/// sets interrupt disable and jumps through 0xFFFE/0xFFFF.
pub(crate) fn brk<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.status.insert(Status::INTERRUPT_DISABLE);
    cpu.push(bus, (cpu.pc >> 8) as u8);
    cpu.push(bus, cpu.pc as u8);

    cpu.status.insert(Status::BREAK);
    let packed = cpu.status.bits();
    cpu.push(bus, packed);
    cpu.status.remove(Status::BREAK);

    cpu.pc = bus.read_word(BREAK_VECTOR);
    debug!("BRK: vectoring to ${:04X}", cpu.pc);
    false
}

/// RTI: pulls status (every bit, as stored) then PC.
pub(crate) fn rti<M: MemoryBus + ?Sized>(cpu: &mut Cpu, bus: &mut M) -> bool {
    let packed = cpu.pull(bus);
    cpu.status = Status::from_bits_retain(packed);

    let lo = cpu.pull(bus) as u16;
    let hi = cpu.pull(bus) as u16;
    cpu.pc = (hi << 8) | lo;
    false
}

/// NOP: no effect.
pub(crate) fn nop() -> bool {
    false
}

/// Unofficial opcode: treated as a one-byte no-op.
pub(crate) fn illegal(cpu: &mut Cpu) -> bool {
    debug!(
        "unofficial opcode ${:02X} at ${:04X} treated as no-op",
        cpu.opcode,
        cpu.pc.wrapping_sub(1)
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_jsr_then_rts_resumes_after_call() {
        let mut mem = FlatMemory::new();
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        // JSR $3000 at $2000; PC already past the operand
        cpu.pc = 0x2003;
        cpu.addr_abs = 0x3000;

        jsr(&mut cpu, &mut mem);

        assert_eq!(cpu.pc, 0x3000);
        assert_eq!(cpu.sp, 0xFB);
        assert_eq!(mem.read(0x01FD), 0x20);
        assert_eq!(mem.read(0x01FC), 0x02);

        rts(&mut cpu, &mut mem);

        assert_eq!(cpu.pc, 0x2003);
        assert_eq!(cpu.sp, 0xFD);
    }

    #[test]
    fn test_brk_pushes_state_and_vectors() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFE, 0x00);
        mem.write(0xFFFF, 0x40);
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        // BRK fetched at $2000
        cpu.pc = 0x2001;
        cpu.status = Status::CARRY;

        brk(&mut cpu, &mut mem);

        assert_eq!(cpu.pc, 0x4000);
        assert_eq!(cpu.sp, 0xFA);
        assert_eq!(mem.read(0x01FD), 0x20);
        assert_eq!(mem.read(0x01FC), 0x02);
        let pushed = Status::from_bits_retain(mem.read(0x01FB));
        assert!(pushed.contains(Status::BREAK | Status::INTERRUPT_DISABLE | Status::CARRY));
        assert!(!cpu.flag(Status::BREAK));
        assert!(cpu.flag(Status::INTERRUPT_DISABLE));
    }

    #[test]
    fn test_rti_restores_brk_frame() {
        let mut mem = FlatMemory::new();
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;
        cpu.pc = 0x2001;
        cpu.status = Status::OVERFLOW;

        brk(&mut cpu, &mut mem);
        rti(&mut cpu, &mut mem);

        assert_eq!(cpu.pc, 0x2002);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(
            cpu.status,
            Status::OVERFLOW | Status::INTERRUPT_DISABLE | Status::BREAK
        );
    }

    #[test]
    fn test_jmp() {
        let mut cpu = Cpu::new();
        cpu.addr_abs = 0x1234;
        jmp(&mut cpu);
        assert_eq!(cpu.pc, 0x1234);
    }
}

//! # Register Transfer Instructions
//!
//! Copies between A, X, Y and SP. Every transfer except TXS sets Z and N
//! from the copied value.

use crate::cpu::Cpu;

pub(crate) fn tax(cpu: &mut Cpu) -> bool {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
    false
}

pub(crate) fn tay(cpu: &mut Cpu) -> bool {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
    false
}

pub(crate) fn txa(cpu: &mut Cpu) -> bool {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn tya(cpu: &mut Cpu) -> bool {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
    false
}

pub(crate) fn tsx(cpu: &mut Cpu) -> bool {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
    false
}

/// TXS: SP = X. Flags untouched.
pub(crate) fn txs(cpu: &mut Cpu) -> bool {
    cpu.sp = cpu.x;
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[test]
    fn test_transfers_set_flags() {
        let mut cpu = Cpu::new();
        cpu.a = 0x80;

        tax(&mut cpu);
        assert_eq!(cpu.x, 0x80);
        assert!(cpu.flag(Status::NEGATIVE));

        cpu.a = 0x00;
        tay(&mut cpu);
        assert_eq!(cpu.y, 0x00);
        assert!(cpu.flag(Status::ZERO));

        txa(&mut cpu);
        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.flag(Status::ZERO));

        tya(&mut cpu);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.flag(Status::ZERO));
    }

    #[test]
    fn test_stack_pointer_transfers() {
        let mut cpu = Cpu::new();
        cpu.sp = 0xFD;

        tsx(&mut cpu);
        assert_eq!(cpu.x, 0xFD);
        assert!(cpu.flag(Status::NEGATIVE));

        cpu.x = 0x00;
        cpu.status = Status::empty();
        txs(&mut cpu);
        assert_eq!(cpu.sp, 0x00);
        assert!(cpu.status.is_empty());
    }
}

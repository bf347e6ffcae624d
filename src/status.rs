//! # Processor Status
//!
//! The eight status flags live in a single byte. The packed layout is fixed:
//!
//! | Bit | Flag |
//! |-----|------|
//! | 0 | Carry |
//! | 1 | Zero |
//! | 2 | Interrupt disable |
//! | 3 | Decimal mode (stored, never acted upon) |
//! | 4 | Break |
//! | 5 | Overflow |
//! | 6 | Negative |
//! | 7 | Unused |
//!
//! The byte only crosses the bus at stack boundaries (PHP, PLP, BRK, RTI).

use bitflags::bitflags;

bitflags! {
    /// CPU status register flags.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry out of bit 7, or "no borrow" after a subtraction.
        const CARRY = 0b0000_0001;
        /// Result was zero.
        const ZERO = 0b0000_0010;
        /// Interrupt disable.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode. Decimal arithmetic is not implemented.
        const DECIMAL = 0b0000_1000;
        /// Break, set only around the BRK push.
        const BREAK = 0b0001_0000;
        /// Signed overflow.
        const OVERFLOW = 0b0010_0000;
        /// Bit 7 of the result.
        const NEGATIVE = 0b0100_0000;
        /// Unused.
        const UNUSED = 0b1000_0000;
    }
}

impl Status {
    /// Sets ZERO and NEGATIVE from an 8-bit result.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Carry as 0 or 1, for the widened arithmetic.
    pub fn carry_bit(self) -> u16 {
        u16::from(self.contains(Status::CARRY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_bit_order() {
        assert_eq!(Status::CARRY.bits(), 1 << 0);
        assert_eq!(Status::ZERO.bits(), 1 << 1);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 1 << 2);
        assert_eq!(Status::DECIMAL.bits(), 1 << 3);
        assert_eq!(Status::BREAK.bits(), 1 << 4);
        assert_eq!(Status::OVERFLOW.bits(), 1 << 5);
        assert_eq!(Status::NEGATIVE.bits(), 1 << 6);
        assert_eq!(Status::UNUSED.bits(), 1 << 7);
    }

    #[test]
    fn test_unpack_keeps_every_bit() {
        for byte in 0..=255u8 {
            assert_eq!(Status::from_bits_retain(byte).bits(), byte);
        }
    }

    #[test]
    fn test_set_zn() {
        let mut status = Status::empty();
        status.set_zn(0x00);
        assert!(status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));

        status.set_zn(0x80);
        assert!(!status.contains(Status::ZERO));
        assert!(status.contains(Status::NEGATIVE));

        status.set_zn(0x42);
        assert!(status.is_empty());
    }
}

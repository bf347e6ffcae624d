//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. Each mode determines how many operand
//! bytes follow the opcode and how the CPU resolves them into an effective
//! address (or, for the accumulator forms, skips memory entirely).

use std::fmt;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// Signed 8-bit offset, only used by branches.
    Relative,

    /// Full 16-bit address, little-endian.
    Absolute,

    /// 16-bit address indexed by X. Reports an extra cycle on page crossing.
    AbsoluteX,

    /// 16-bit address indexed by Y. Reports an extra cycle on page crossing.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer.
    ///
    /// Reproduces the NMOS page-wrap defect: `JMP ($30FF)` takes its high
    /// byte from $3000, not $3100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y. Reports an extra cycle on
    /// page crossing.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Returns true for the modes whose operand is the accumulator rather
    /// than a memory location.
    pub fn targets_accumulator(self) -> bool {
        matches!(self, AddressingMode::Implicit | AddressingMode::Accumulator)
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressingMode::Implicit => "implicit",
            AddressingMode::Accumulator => "accumulator",
            AddressingMode::Immediate => "immediate",
            AddressingMode::ZeroPage => "zero page",
            AddressingMode::ZeroPageX => "zero page,X",
            AddressingMode::ZeroPageY => "zero page,Y",
            AddressingMode::Relative => "relative",
            AddressingMode::Absolute => "absolute",
            AddressingMode::AbsoluteX => "absolute,X",
            AddressingMode::AbsoluteY => "absolute,Y",
            AddressingMode::Indirect => "indirect",
            AddressingMode::IndirectX => "(indirect,X)",
            AddressingMode::IndirectY => "(indirect),Y",
        };
        f.write_str(name)
    }
}

//! # Instruction Dispatch Table
//!
//! The complete 256-entry table mapping an opcode byte to its operation,
//! addressing mode and base cycle count. It is the single source of truth for
//! which operation/mode pair runs and for the timing before extra-cycle
//! adjustments. Unofficial opcodes are populated with [`Operation::Illegal`],
//! a one-byte no-op that still costs its table cycles, so dispatch never needs
//! a missing-entry fallback.
//!
//! Cycle counts follow the Rockwell R650x datasheet opcode matrix.

use std::fmt;

use crate::addressing::AddressingMode;

/// The 56 documented 6502 operations plus the catch-all illegal no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Add with carry
    Adc,
    /// Logical AND
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal
    Beq,
    /// Bit test
    Bit,
    /// Branch if minus
    Bmi,
    /// Branch if not equal
    Bne,
    /// Branch if positive
    Bpl,
    /// Force break
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare accumulator
    Cmp,
    /// Compare X
    Cpx,
    /// Compare Y
    Cpy,
    /// Decrement memory
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR
    Eor,
    /// Increment memory
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical inclusive OR
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Store accumulator
    Sta,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Transfer A to X
    Tax,
    /// Transfer A to Y
    Tay,
    /// Transfer SP to X
    Tsx,
    /// Transfer X to A
    Txa,
    /// Transfer X to SP
    Txs,
    /// Transfer Y to A
    Tya,
    /// Any unofficial opcode. Does nothing.
    Illegal,
}

impl Operation {
    /// Every documented operation, in mnemonic order.
    pub const DOCUMENTED: [Operation; 56] = [
        Operation::Adc, Operation::And, Operation::Asl, Operation::Bcc,
        Operation::Bcs, Operation::Beq, Operation::Bit, Operation::Bmi,
        Operation::Bne, Operation::Bpl, Operation::Brk, Operation::Bvc,
        Operation::Bvs, Operation::Clc, Operation::Cld, Operation::Cli,
        Operation::Clv, Operation::Cmp, Operation::Cpx, Operation::Cpy,
        Operation::Dec, Operation::Dex, Operation::Dey, Operation::Eor,
        Operation::Inc, Operation::Inx, Operation::Iny, Operation::Jmp,
        Operation::Jsr, Operation::Lda, Operation::Ldx, Operation::Ldy,
        Operation::Lsr, Operation::Nop, Operation::Ora, Operation::Pha,
        Operation::Php, Operation::Pla, Operation::Plp, Operation::Rol,
        Operation::Ror, Operation::Rti, Operation::Rts, Operation::Sbc,
        Operation::Sec, Operation::Sed, Operation::Sei, Operation::Sta,
        Operation::Stx, Operation::Sty, Operation::Tax, Operation::Tay,
        Operation::Tsx, Operation::Txa, Operation::Txs, Operation::Tya,
    ];

    /// Three-letter mnemonic, `"???"` for illegal opcodes.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }

    /// Parses a mnemonic, ignoring ASCII case.
    ///
    /// Returns `None` for unknown mnemonics and for `"???"`.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Operation> {
        let op = match mnemonic.to_ascii_uppercase().as_str() {
            "ADC" => Operation::Adc,
            "AND" => Operation::And,
            "ASL" => Operation::Asl,
            "BCC" => Operation::Bcc,
            "BCS" => Operation::Bcs,
            "BEQ" => Operation::Beq,
            "BIT" => Operation::Bit,
            "BMI" => Operation::Bmi,
            "BNE" => Operation::Bne,
            "BPL" => Operation::Bpl,
            "BRK" => Operation::Brk,
            "BVC" => Operation::Bvc,
            "BVS" => Operation::Bvs,
            "CLC" => Operation::Clc,
            "CLD" => Operation::Cld,
            "CLI" => Operation::Cli,
            "CLV" => Operation::Clv,
            "CMP" => Operation::Cmp,
            "CPX" => Operation::Cpx,
            "CPY" => Operation::Cpy,
            "DEC" => Operation::Dec,
            "DEX" => Operation::Dex,
            "DEY" => Operation::Dey,
            "EOR" => Operation::Eor,
            "INC" => Operation::Inc,
            "INX" => Operation::Inx,
            "INY" => Operation::Iny,
            "JMP" => Operation::Jmp,
            "JSR" => Operation::Jsr,
            "LDA" => Operation::Lda,
            "LDX" => Operation::Ldx,
            "LDY" => Operation::Ldy,
            "LSR" => Operation::Lsr,
            "NOP" => Operation::Nop,
            "ORA" => Operation::Ora,
            "PHA" => Operation::Pha,
            "PHP" => Operation::Php,
            "PLA" => Operation::Pla,
            "PLP" => Operation::Plp,
            "ROL" => Operation::Rol,
            "ROR" => Operation::Ror,
            "RTI" => Operation::Rti,
            "RTS" => Operation::Rts,
            "SBC" => Operation::Sbc,
            "SEC" => Operation::Sec,
            "SED" => Operation::Sed,
            "SEI" => Operation::Sei,
            "STA" => Operation::Sta,
            "STX" => Operation::Stx,
            "STY" => Operation::Sty,
            "TAX" => Operation::Tax,
            "TAY" => Operation::Tay,
            "TSX" => Operation::Tsx,
            "TXA" => Operation::Txa,
            "TXS" => Operation::Txs,
            "TYA" => Operation::Tya,
            _ => return None,
        };
        Some(op)
    }

    /// Returns true for the eight conditional branches.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bmi
                | Operation::Bne
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Immutable descriptor for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// What the instruction does.
    pub operation: Operation,

    /// How its operand is located.
    pub mode: AddressingMode,

    /// Cycles charged before any extra-cycle adjustment.
    pub cycles: u8,
}

impl Instruction {
    /// Total instruction size in bytes (opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

const fn ins(operation: Operation, mode: AddressingMode, cycles: u8) -> Instruction {
    Instruction {
        operation,
        mode,
        cycles,
    }
}

/// Complete 256-entry dispatch table indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Operation, INSTRUCTION_TABLE};
///
/// let ldx = &INSTRUCTION_TABLE[0xA2];
/// assert_eq!(ldx.operation, Operation::Ldx);
/// assert_eq!(ldx.mode, AddressingMode::Immediate);
/// assert_eq!(ldx.cycles, 2);
/// ```
pub const INSTRUCTION_TABLE: [Instruction; 256] = {
    use AddressingMode::*;
    use Operation::*;

    [
        // 0x00
        ins(Brk, Implicit, 7), ins(Ora, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x04
        ins(Illegal, Implicit, 3), ins(Ora, ZeroPage, 3), ins(Asl, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0x08
        ins(Php, Implicit, 3), ins(Ora, Immediate, 2), ins(Asl, Accumulator, 2), ins(Illegal, Implicit, 2),
        // 0x0C
        ins(Illegal, Implicit, 4), ins(Ora, Absolute, 4), ins(Asl, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0x10
        ins(Bpl, Relative, 2), ins(Ora, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x14
        ins(Illegal, Implicit, 4), ins(Ora, ZeroPageX, 4), ins(Asl, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0x18
        ins(Clc, Implicit, 2), ins(Ora, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0x1C
        ins(Illegal, Implicit, 4), ins(Ora, AbsoluteX, 4), ins(Asl, AbsoluteX, 7), ins(Illegal, Implicit, 7),
        // 0x20
        ins(Jsr, Absolute, 6), ins(And, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x24
        ins(Bit, ZeroPage, 3), ins(And, ZeroPage, 3), ins(Rol, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0x28
        ins(Plp, Implicit, 4), ins(And, Immediate, 2), ins(Rol, Accumulator, 2), ins(Illegal, Implicit, 2),
        // 0x2C
        ins(Bit, Absolute, 4), ins(And, Absolute, 4), ins(Rol, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0x30
        ins(Bmi, Relative, 2), ins(And, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x34
        ins(Illegal, Implicit, 4), ins(And, ZeroPageX, 4), ins(Rol, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0x38
        ins(Sec, Implicit, 2), ins(And, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0x3C
        ins(Illegal, Implicit, 4), ins(And, AbsoluteX, 4), ins(Rol, AbsoluteX, 7), ins(Illegal, Implicit, 7),
        // 0x40
        ins(Rti, Implicit, 6), ins(Eor, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x44
        ins(Illegal, Implicit, 3), ins(Eor, ZeroPage, 3), ins(Lsr, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0x48
        ins(Pha, Implicit, 3), ins(Eor, Immediate, 2), ins(Lsr, Accumulator, 2), ins(Illegal, Implicit, 2),
        // 0x4C
        ins(Jmp, Absolute, 3), ins(Eor, Absolute, 4), ins(Lsr, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0x50
        ins(Bvc, Relative, 2), ins(Eor, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x54
        ins(Illegal, Implicit, 4), ins(Eor, ZeroPageX, 4), ins(Lsr, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0x58
        ins(Cli, Implicit, 2), ins(Eor, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0x5C
        ins(Illegal, Implicit, 4), ins(Eor, AbsoluteX, 4), ins(Lsr, AbsoluteX, 7), ins(Illegal, Implicit, 7),
        // 0x60
        ins(Rts, Implicit, 6), ins(Adc, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x64
        ins(Illegal, Implicit, 3), ins(Adc, ZeroPage, 3), ins(Ror, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0x68
        ins(Pla, Implicit, 4), ins(Adc, Immediate, 2), ins(Ror, Accumulator, 2), ins(Illegal, Implicit, 2),
        // 0x6C
        ins(Jmp, Indirect, 5), ins(Adc, Absolute, 4), ins(Ror, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0x70
        ins(Bvs, Relative, 2), ins(Adc, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0x74
        ins(Illegal, Implicit, 4), ins(Adc, ZeroPageX, 4), ins(Ror, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0x78
        ins(Sei, Implicit, 2), ins(Adc, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0x7C
        ins(Illegal, Implicit, 4), ins(Adc, AbsoluteX, 4), ins(Ror, AbsoluteX, 7), ins(Illegal, Implicit, 7),
        // 0x80
        ins(Illegal, Implicit, 2), ins(Sta, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 6),
        // 0x84
        ins(Sty, ZeroPage, 3), ins(Sta, ZeroPage, 3), ins(Stx, ZeroPage, 3), ins(Illegal, Implicit, 3),
        // 0x88
        ins(Dey, Implicit, 2), ins(Illegal, Implicit, 2), ins(Txa, Implicit, 2), ins(Illegal, Implicit, 2),
        // 0x8C
        ins(Sty, Absolute, 4), ins(Sta, Absolute, 4), ins(Stx, Absolute, 4), ins(Illegal, Implicit, 4),
        // 0x90
        ins(Bcc, Relative, 2), ins(Sta, IndirectY, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 6),
        // 0x94
        ins(Sty, ZeroPageX, 4), ins(Sta, ZeroPageX, 4), ins(Stx, ZeroPageY, 4), ins(Illegal, Implicit, 4),
        // 0x98
        ins(Tya, Implicit, 2), ins(Sta, AbsoluteY, 5), ins(Txs, Implicit, 2), ins(Illegal, Implicit, 5),
        // 0x9C
        ins(Illegal, Implicit, 5), ins(Sta, AbsoluteX, 5), ins(Illegal, Implicit, 5), ins(Illegal, Implicit, 5),
        // 0xA0
        ins(Ldy, Immediate, 2), ins(Lda, IndirectX, 6), ins(Ldx, Immediate, 2), ins(Illegal, Implicit, 6),
        // 0xA4
        ins(Ldy, ZeroPage, 3), ins(Lda, ZeroPage, 3), ins(Ldx, ZeroPage, 3), ins(Illegal, Implicit, 3),
        // 0xA8
        ins(Tay, Implicit, 2), ins(Lda, Immediate, 2), ins(Tax, Implicit, 2), ins(Illegal, Implicit, 2),
        // 0xAC
        ins(Ldy, Absolute, 4), ins(Lda, Absolute, 4), ins(Ldx, Absolute, 4), ins(Illegal, Implicit, 4),
        // 0xB0
        ins(Bcs, Relative, 2), ins(Lda, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 5),
        // 0xB4
        ins(Ldy, ZeroPageX, 4), ins(Lda, ZeroPageX, 4), ins(Ldx, ZeroPageY, 4), ins(Illegal, Implicit, 4),
        // 0xB8
        ins(Clv, Implicit, 2), ins(Lda, AbsoluteY, 4), ins(Tsx, Implicit, 2), ins(Illegal, Implicit, 4),
        // 0xBC
        ins(Ldy, AbsoluteX, 4), ins(Lda, AbsoluteX, 4), ins(Ldx, AbsoluteY, 4), ins(Illegal, Implicit, 4),
        // 0xC0
        ins(Cpy, Immediate, 2), ins(Cmp, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0xC4
        ins(Cpy, ZeroPage, 3), ins(Cmp, ZeroPage, 3), ins(Dec, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0xC8
        ins(Iny, Implicit, 2), ins(Cmp, Immediate, 2), ins(Dex, Implicit, 2), ins(Illegal, Implicit, 2),
        // 0xCC
        ins(Cpy, Absolute, 4), ins(Cmp, Absolute, 4), ins(Dec, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0xD0
        ins(Bne, Relative, 2), ins(Cmp, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0xD4
        ins(Illegal, Implicit, 4), ins(Cmp, ZeroPageX, 4), ins(Dec, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0xD8
        ins(Cld, Implicit, 2), ins(Cmp, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0xDC
        ins(Illegal, Implicit, 4), ins(Cmp, AbsoluteX, 4), ins(Dec, AbsoluteX, 7), ins(Illegal, Implicit, 7),
        // 0xE0
        ins(Cpx, Immediate, 2), ins(Sbc, IndirectX, 6), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0xE4
        ins(Cpx, ZeroPage, 3), ins(Sbc, ZeroPage, 3), ins(Inc, ZeroPage, 5), ins(Illegal, Implicit, 5),
        // 0xE8
        ins(Inx, Implicit, 2), ins(Sbc, Immediate, 2), ins(Nop, Implicit, 2), ins(Illegal, Implicit, 2),
        // 0xEC
        ins(Cpx, Absolute, 4), ins(Sbc, Absolute, 4), ins(Inc, Absolute, 6), ins(Illegal, Implicit, 6),
        // 0xF0
        ins(Beq, Relative, 2), ins(Sbc, IndirectY, 5), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 8),
        // 0xF4
        ins(Illegal, Implicit, 4), ins(Sbc, ZeroPageX, 4), ins(Inc, ZeroPageX, 6), ins(Illegal, Implicit, 6),
        // 0xF8
        ins(Sed, Implicit, 2), ins(Sbc, AbsoluteY, 4), ins(Illegal, Implicit, 2), ins(Illegal, Implicit, 7),
        // 0xFC
        ins(Illegal, Implicit, 4), ins(Sbc, AbsoluteX, 4), ins(Inc, AbsoluteX, 7), ins(Illegal, Implicit, 7),
    ]
};

/// Looks up the descriptor for an opcode.
pub fn decode(opcode: u8) -> &'static Instruction {
    &INSTRUCTION_TABLE[opcode as usize]
}

/// Finds the opcode implementing `operation` in `mode`.
///
/// Returns `None` for [`Operation::Illegal`] and for pairs the 6502 does not
/// have (e.g. `STA #imm`).
pub fn encode(operation: Operation, mode: AddressingMode) -> Option<u8> {
    if operation == Operation::Illegal {
        return None;
    }
    INSTRUCTION_TABLE
        .iter()
        .position(|ins| ins.operation == operation && ins.mode == mode)
        .map(|index| index as u8)
}

/// Returns true if `operation` has an encoding in `mode`.
pub fn supports(operation: Operation, mode: AddressingMode) -> bool {
    encode(operation, mode).is_some()
}
